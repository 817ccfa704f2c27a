//! Pre-save timestamp stamping.
//!
//! Services call these right before handing a row to the store. The store
//! never fills or refreshes timestamps itself, so the values written are
//! exactly the ones computed here.

use crate::types::Timestamp;

/// Timestamps for a freshly created row that tracks both creation and
/// modification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationStamp {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Stamp a new row: `created_at` and `updated_at` are both `now`.
pub fn creation_stamp(now: Timestamp) -> CreationStamp {
    CreationStamp {
        created_at: now,
        updated_at: now,
    }
}

/// Compute the `updated_at` value for a mutation of a row created at
/// `created_at`.
///
/// Never returns a value earlier than `created_at`, so a wall clock that
/// stepped backwards cannot produce `updated_at < created_at`.
pub fn refresh_stamp(created_at: Timestamp, now: Timestamp) -> Timestamp {
    now.max(created_at)
}

/// Stamp the completion time of a score. Set once, at creation.
pub fn completion_stamp(now: Timestamp) -> Timestamp {
    now
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn creation_sets_both_fields_equal() {
        let stamp = creation_stamp(at(0));
        assert_eq!(stamp.created_at, stamp.updated_at);
        assert_eq!(stamp.created_at, at(0));
    }

    #[test]
    fn refresh_moves_forward() {
        assert_eq!(refresh_stamp(at(0), at(60)), at(60));
    }

    #[test]
    fn refresh_never_precedes_creation() {
        let created = at(100);
        let skewed_now = created - Duration::seconds(5);
        assert_eq!(refresh_stamp(created, skewed_now), created);
    }

    #[test]
    fn completion_is_now() {
        assert_eq!(completion_stamp(at(7)), at(7));
    }
}
