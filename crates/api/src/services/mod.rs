//! Business rules between the HTTP handlers and the store.
//!
//! Each service borrows a store for the duration of a request
//! (`AssessmentService::new(&state.store)`), validates input, stamps
//! timestamps and turns missing rows into [`CoreError::NotFound`].
//!
//! [`CoreError::NotFound`]: skillcheck_core::error::CoreError::NotFound

pub mod assessment;
pub mod company;
pub mod game;
pub mod report;
pub mod review;
pub mod score;
pub mod user;

pub use assessment::AssessmentService;
pub use company::CompanyService;
pub use game::GameService;
pub use report::ReportService;
pub use review::ReviewService;
pub use score::ScoreService;
pub use user::UserService;

use skillcheck_core::error::CoreError;
use skillcheck_core::types::DbId;

use crate::error::AppError;

/// Shorthand for the error returned when a row with `id` does not exist.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}
