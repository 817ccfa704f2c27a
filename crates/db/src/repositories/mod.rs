//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every write is a single
//! statement, so each create/update/delete is atomic on its own.

pub mod assessment_repo;
pub mod company_repo;
pub mod game_repo;
pub mod report_repo;
pub mod review_repo;
pub mod score_repo;
pub mod user_repo;

pub use assessment_repo::AssessmentRepo;
pub use company_repo::CompanyRepo;
pub use game_repo::GameRepo;
pub use report_repo::ReportRepo;
pub use review_repo::ReviewRepo;
pub use score_repo::ScoreRepo;
pub use user_repo::UserRepo;
