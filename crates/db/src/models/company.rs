//! Company entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillcheck_core::types::DbId;
use skillcheck_core::validation::non_blank;
use sqlx::FromRow;
use validator::Validate;

use crate::models::user::User;

/// A company row from the `companies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: DbId,
    pub company_name: String,
    pub company_number: String,
}

/// A company together with every user attached to it (its recruiters).
///
/// These are the same users removed when the company is deleted.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyWithRecruiters {
    #[serde(flatten)]
    pub company: Company,
    pub recruiters: Vec<User>,
}

/// DTO for creating a new company.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    #[validate(custom(function = "non_blank"))]
    pub company_name: String,
    /// Must be unique across all companies.
    #[validate(custom(function = "non_blank"))]
    pub company_number: String,
}

/// DTO for updating an existing company. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompany {
    #[validate(custom(function = "non_blank"))]
    pub company_name: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub company_number: Option<String>,
}
