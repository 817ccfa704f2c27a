//! Review entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillcheck_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// A review row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: DbId,
    pub user_id: DbId,
    pub message: String,
}

/// DTO for creating a new review.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub user_id: DbId,
    pub message: String,
}

/// DTO for updating an existing review. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    pub user_id: Option<DbId>,
    pub message: Option<String>,
}
