//! Store seam between the service layer and persistence.
//!
//! One trait per entity. Services are generic over [`Store`], which every
//! type implementing all entity traits gets for free. [`PgStore`] delegates
//! to the PostgreSQL repositories, [`MemoryStore`] keeps rows in process and
//! enforces the same unique constraints and cascades.
//!
//! Method names carry the entity so a single store type can implement every
//! trait without call-site ambiguity.

use std::future::Future;

use skillcheck_core::types::{DbId, Timestamp};

use crate::models::assessment::{Assessment, NewAssessment, UpdateAssessment};
use crate::models::company::{Company, CreateCompany, UpdateCompany};
use crate::models::game::{CreateGame, Game, UpdateGame};
use crate::models::report::{NewReport, Report, UpdateReport};
use crate::models::review::{CreateReview, Review, UpdateReview};
use crate::models::score::{NewScore, Score, UpdateScore};
use crate::models::user::{CreateUser, UpdateUser, User};

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Unique constraint on `companies.company_number`.
pub const UQ_COMPANY_NUMBER: &str = "uq_companies_company_number";

/// Unique constraint on `users.email`.
pub const UQ_USER_EMAIL: &str = "uq_users_email";

/// PostgreSQL SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Errors surfaced by any store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write collided with a unique constraint.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                return StoreError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Connectivity check used by the health endpoint.
pub trait StoreHealth: Send + Sync {
    fn ping(&self) -> impl Future<Output = StoreResult<()>> + Send;
}

pub trait CompanyStore: Send + Sync {
    fn list_companies(&self) -> impl Future<Output = StoreResult<Vec<Company>>> + Send;

    fn find_company(&self, id: DbId) -> impl Future<Output = StoreResult<Option<Company>>> + Send;

    fn find_company_by_number(
        &self,
        company_number: &str,
    ) -> impl Future<Output = StoreResult<Option<Company>>> + Send;

    fn insert_company(
        &self,
        input: &CreateCompany,
    ) -> impl Future<Output = StoreResult<Company>> + Send;

    fn update_company(
        &self,
        id: DbId,
        input: &UpdateCompany,
    ) -> impl Future<Output = StoreResult<Option<Company>>> + Send;

    /// Delete a company and every user attached to it.
    fn delete_company(&self, id: DbId) -> impl Future<Output = StoreResult<bool>> + Send;
}

pub trait UserStore: Send + Sync {
    fn list_users(&self) -> impl Future<Output = StoreResult<Vec<User>>> + Send;

    fn find_user(&self, id: DbId) -> impl Future<Output = StoreResult<Option<User>>> + Send;

    fn find_user_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = StoreResult<Option<User>>> + Send;

    fn list_users_by_company(
        &self,
        company_id: DbId,
    ) -> impl Future<Output = StoreResult<Vec<User>>> + Send;

    fn insert_user(&self, input: &CreateUser) -> impl Future<Output = StoreResult<User>> + Send;

    fn update_user(
        &self,
        id: DbId,
        input: &UpdateUser,
    ) -> impl Future<Output = StoreResult<Option<User>>> + Send;

    fn delete_user(&self, id: DbId) -> impl Future<Output = StoreResult<bool>> + Send;
}

pub trait GameStore: Send + Sync {
    fn list_games(&self) -> impl Future<Output = StoreResult<Vec<Game>>> + Send;

    fn find_game(&self, id: DbId) -> impl Future<Output = StoreResult<Option<Game>>> + Send;

    fn list_games_by_active(
        &self,
        active: bool,
    ) -> impl Future<Output = StoreResult<Vec<Game>>> + Send;

    fn list_games_by_type(
        &self,
        game_type: &str,
    ) -> impl Future<Output = StoreResult<Vec<Game>>> + Send;

    fn insert_game(&self, input: &CreateGame) -> impl Future<Output = StoreResult<Game>> + Send;

    fn update_game(
        &self,
        id: DbId,
        input: &UpdateGame,
    ) -> impl Future<Output = StoreResult<Option<Game>>> + Send;

    fn delete_game(&self, id: DbId) -> impl Future<Output = StoreResult<bool>> + Send;
}

pub trait AssessmentStore: Send + Sync {
    fn list_assessments(&self) -> impl Future<Output = StoreResult<Vec<Assessment>>> + Send;

    fn find_assessment(
        &self,
        id: DbId,
    ) -> impl Future<Output = StoreResult<Option<Assessment>>> + Send;

    fn list_assessments_by_candidate(
        &self,
        candidate_id: DbId,
    ) -> impl Future<Output = StoreResult<Vec<Assessment>>> + Send;

    fn list_assessments_by_hr(
        &self,
        hr_id: DbId,
    ) -> impl Future<Output = StoreResult<Vec<Assessment>>> + Send;

    fn list_assessments_by_status(
        &self,
        status: &str,
    ) -> impl Future<Output = StoreResult<Vec<Assessment>>> + Send;

    fn insert_assessment(
        &self,
        input: &NewAssessment,
    ) -> impl Future<Output = StoreResult<Assessment>> + Send;

    /// Apply `input` and write `updated_at` unconditionally.
    fn update_assessment(
        &self,
        id: DbId,
        input: &UpdateAssessment,
        updated_at: Timestamp,
    ) -> impl Future<Output = StoreResult<Option<Assessment>>> + Send;

    fn delete_assessment(&self, id: DbId) -> impl Future<Output = StoreResult<bool>> + Send;
}

pub trait ScoreStore: Send + Sync {
    fn list_scores(&self) -> impl Future<Output = StoreResult<Vec<Score>>> + Send;

    fn find_score(&self, id: DbId) -> impl Future<Output = StoreResult<Option<Score>>> + Send;

    /// Lowest-id score recorded for the assessment, if any.
    fn find_score_by_assessment(
        &self,
        assessment_id: DbId,
    ) -> impl Future<Output = StoreResult<Option<Score>>> + Send;

    fn list_scores_by_candidate(
        &self,
        candidate_id: DbId,
    ) -> impl Future<Output = StoreResult<Vec<Score>>> + Send;

    fn insert_score(&self, input: &NewScore) -> impl Future<Output = StoreResult<Score>> + Send;

    fn update_score(
        &self,
        id: DbId,
        input: &UpdateScore,
    ) -> impl Future<Output = StoreResult<Option<Score>>> + Send;

    fn delete_score(&self, id: DbId) -> impl Future<Output = StoreResult<bool>> + Send;
}

pub trait ReportStore: Send + Sync {
    fn list_reports(&self) -> impl Future<Output = StoreResult<Vec<Report>>> + Send;

    fn find_report(&self, id: DbId) -> impl Future<Output = StoreResult<Option<Report>>> + Send;

    fn list_reports_by_user(
        &self,
        user_id: DbId,
    ) -> impl Future<Output = StoreResult<Vec<Report>>> + Send;

    fn insert_report(&self, input: &NewReport) -> impl Future<Output = StoreResult<Report>> + Send;

    fn update_report(
        &self,
        id: DbId,
        input: &UpdateReport,
    ) -> impl Future<Output = StoreResult<Option<Report>>> + Send;

    fn delete_report(&self, id: DbId) -> impl Future<Output = StoreResult<bool>> + Send;
}

pub trait ReviewStore: Send + Sync {
    fn list_reviews(&self) -> impl Future<Output = StoreResult<Vec<Review>>> + Send;

    fn find_review(&self, id: DbId) -> impl Future<Output = StoreResult<Option<Review>>> + Send;

    fn list_reviews_by_user(
        &self,
        user_id: DbId,
    ) -> impl Future<Output = StoreResult<Vec<Review>>> + Send;

    fn insert_review(
        &self,
        input: &CreateReview,
    ) -> impl Future<Output = StoreResult<Review>> + Send;

    fn update_review(
        &self,
        id: DbId,
        input: &UpdateReview,
    ) -> impl Future<Output = StoreResult<Option<Review>>> + Send;

    fn delete_review(&self, id: DbId) -> impl Future<Output = StoreResult<bool>> + Send;
}

/// Everything the HTTP layer needs from persistence.
pub trait Store:
    StoreHealth
    + CompanyStore
    + UserStore
    + GameStore
    + AssessmentStore
    + ScoreStore
    + ReportStore
    + ReviewStore
    + Clone
    + 'static
{
}

impl<T> Store for T where
    T: StoreHealth
        + CompanyStore
        + UserStore
        + GameStore
        + AssessmentStore
        + ScoreStore
        + ReportStore
        + ReviewStore
        + Clone
        + 'static
{
}
