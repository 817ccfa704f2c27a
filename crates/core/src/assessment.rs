//! Assessment lifecycle status.
//!
//! An assessment is always created `PENDING`. Any later status change is
//! made by the caller through an update; nothing in the service moves an
//! assessment between states on its own (a score being recorded does not
//! complete it, a passed due date does not expire it).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Assessment has been assigned and not yet finished.
pub const STATUS_PENDING: &str = "PENDING";

/// Candidate finished the assigned game.
pub const STATUS_COMPLETED: &str = "COMPLETED";

/// Assessment is no longer valid for the candidate.
pub const STATUS_EXPIRED: &str = "EXPIRED";

/// All valid assessment status values, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_COMPLETED, STATUS_EXPIRED];

/* --------------------------------------------------------------------------
Status enum
-------------------------------------------------------------------------- */

/// Lifecycle status of an assessment.
///
/// Transitions are unrestricted: any status may be replaced by any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentStatus {
    #[default]
    Pending,
    Completed,
    Expired,
}

impl AssessmentStatus {
    /// Status every new assessment starts in.
    pub const INITIAL: AssessmentStatus = AssessmentStatus::Pending;

    /// Return the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Completed => STATUS_COMPLETED,
            Self::Expired => STATUS_EXPIRED,
        }
    }
}

impl std::fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_EXPIRED => Ok(Self::Expired),
            other => Err(CoreError::Validation(format!(
                "Invalid assessment status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    status.parse::<AssessmentStatus>().map(|_| ())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn initial_status_is_pending() {
        assert_eq!(AssessmentStatus::INITIAL, AssessmentStatus::Pending);
        assert_eq!(AssessmentStatus::default(), AssessmentStatus::Pending);
    }

    #[test]
    fn parses_every_valid_status() {
        for s in VALID_STATUSES {
            let status: AssessmentStatus = s.parse().unwrap();
            assert_eq!(status.as_str(), *s);
        }
    }

    #[test]
    fn rejects_lowercase_status() {
        assert_matches!(
            "pending".parse::<AssessmentStatus>(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_unknown_status() {
        let err = validate_status("ARCHIVED").unwrap_err();
        assert!(err.to_string().contains("ARCHIVED"));
    }

    #[test]
    fn serializes_as_upper_case() {
        let json = serde_json::to_string(&AssessmentStatus::Completed).unwrap();
        assert_eq!(json, "\"COMPLETED\"");
        let back: AssessmentStatus = serde_json::from_str("\"EXPIRED\"").unwrap();
        assert_eq!(back, AssessmentStatus::Expired);
    }
}
