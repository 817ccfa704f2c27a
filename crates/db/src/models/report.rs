//! Report entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillcheck_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A report row from the `reports` table.
///
/// `fullname`, `email`, `score` and `skill_type` are copies taken when the
/// report is written; they are not kept in sync with the user or score.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_id: DbId,
    pub user_id: DbId,
    pub score_id: DbId,
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub score: Option<String>,
    pub skill_type: Option<String>,
    pub feedback: Option<String>,
    /// Set once at creation, never updated.
    pub created_at: Timestamp,
}

/// DTO for creating a new report.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReport {
    pub user_id: DbId,
    pub score_id: DbId,
    pub fullname: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub score: Option<String>,
    pub skill_type: Option<String>,
    pub feedback: Option<String>,
}

/// Stamped report ready for insertion.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub user_id: DbId,
    pub score_id: DbId,
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub score: Option<String>,
    pub skill_type: Option<String>,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for updating an existing report. All fields are optional.
///
/// `reportId` and `createdAt` in the body are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReport {
    pub user_id: Option<DbId>,
    pub score_id: Option<DbId>,
    pub fullname: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub score: Option<String>,
    pub skill_type: Option<String>,
    pub feedback: Option<String>,
}
