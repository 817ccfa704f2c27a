//! User entity model and DTOs.
//!
//! Only the fields the assessment workflow needs are kept: identity, contact
//! details, role and the owning company for recruiters.

use serde::{Deserialize, Serialize};
use skillcheck_core::types::DbId;
use skillcheck_core::validation::non_blank;
use sqlx::FromRow;
use validator::Validate;

/// A user row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `RECRUITER` or `CANDIDATE`.
    pub role: String,
    pub company_id: Option<DbId>,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(custom(function = "non_blank"))]
    pub first_name: String,
    #[validate(custom(function = "non_blank"))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub role: String,
    pub company_id: Option<DbId>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(custom(function = "non_blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<String>,
    pub company_id: Option<DbId>,
}
