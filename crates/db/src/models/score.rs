//! Score entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillcheck_core::types::{DbId, Timestamp};
use skillcheck_core::validation::non_blank;
use sqlx::FromRow;
use validator::Validate;

/// A score row from the `scores` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub score_id: DbId,
    /// Assessment this score completes. Not unique.
    pub assessment_id: DbId,
    pub candidate_id: DbId,
    /// Textual so grades like `"B+"` are representable.
    pub score: String,
    pub feedback: Option<String>,
    /// Set once at creation, never updated.
    pub completed_at: Timestamp,
    /// Game-specific telemetry, stored and returned verbatim.
    pub game_data: Option<String>,
}

/// DTO for creating a new score.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateScore {
    pub assessment_id: DbId,
    pub candidate_id: DbId,
    #[validate(custom(function = "non_blank"))]
    pub score: String,
    pub feedback: Option<String>,
    pub game_data: Option<String>,
}

/// Stamped score ready for insertion.
#[derive(Debug, Clone)]
pub struct NewScore {
    pub assessment_id: DbId,
    pub candidate_id: DbId,
    pub score: String,
    pub feedback: Option<String>,
    pub completed_at: Timestamp,
    pub game_data: Option<String>,
}

/// DTO for updating an existing score. All fields are optional.
///
/// `completedAt` is not accepted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScore {
    pub assessment_id: Option<DbId>,
    pub candidate_id: Option<DbId>,
    #[validate(custom(function = "non_blank"))]
    pub score: Option<String>,
    pub feedback: Option<String>,
    pub game_data: Option<String>,
}
