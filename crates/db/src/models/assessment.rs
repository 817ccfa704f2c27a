//! Assessment entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillcheck_core::timestamp::deserialize_optional;
use skillcheck_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// An assessment row from the `assessments` table.
///
/// `hr_id`, `candidate_id`, `game_id` and `company_id` are plain
/// identifiers; the referenced records are not checked or joined.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: DbId,
    pub hr_id: DbId,
    pub candidate_id: DbId,
    pub game_id: DbId,
    pub company_id: DbId,
    /// `PENDING`, `COMPLETED` or `EXPIRED`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Advisory only; nothing expires an assessment when it passes.
    pub due_date: Option<Timestamp>,
}

/// DTO for creating a new assessment.
///
/// Status and timestamps are not accepted from the caller: new assessments
/// always start `PENDING` and are stamped by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessment {
    pub hr_id: DbId,
    pub candidate_id: DbId,
    pub game_id: DbId,
    pub company_id: DbId,
    /// RFC 3339, or an offset-less ISO date-time read as UTC.
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub due_date: Option<Timestamp>,
}

/// Fully stamped assessment ready for insertion.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub hr_id: DbId,
    pub candidate_id: DbId,
    pub game_id: DbId,
    pub company_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating an existing assessment. All fields are optional.
///
/// `createdAt` and `updatedAt` are not accepted; `updatedAt` is refreshed
/// by the service on every update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessment {
    pub hr_id: Option<DbId>,
    pub candidate_id: Option<DbId>,
    pub game_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub due_date: Option<Timestamp>,
}
