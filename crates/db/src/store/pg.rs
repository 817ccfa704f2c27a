//! PostgreSQL-backed store delegating to the repositories.

use skillcheck_core::types::{DbId, Timestamp};

use super::{
    AssessmentStore, CompanyStore, GameStore, ReportStore, ReviewStore, ScoreStore, StoreHealth,
    StoreResult, UserStore,
};
use crate::models::assessment::{Assessment, NewAssessment, UpdateAssessment};
use crate::models::company::{Company, CreateCompany, UpdateCompany};
use crate::models::game::{CreateGame, Game, UpdateGame};
use crate::models::report::{NewReport, Report, UpdateReport};
use crate::models::review::{CreateReview, Review, UpdateReview};
use crate::models::score::{NewScore, Score, UpdateScore};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::{
    AssessmentRepo, CompanyRepo, GameRepo, ReportRepo, ReviewRepo, ScoreRepo, UserRepo,
};
use crate::DbPool;

/// Store backed by a PostgreSQL connection pool.
///
/// Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StoreHealth for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

impl CompanyStore for PgStore {
    async fn list_companies(&self) -> StoreResult<Vec<Company>> {
        Ok(CompanyRepo::list(&self.pool).await?)
    }

    async fn find_company(&self, id: DbId) -> StoreResult<Option<Company>> {
        Ok(CompanyRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_company_by_number(&self, company_number: &str) -> StoreResult<Option<Company>> {
        Ok(CompanyRepo::find_by_number(&self.pool, company_number).await?)
    }

    async fn insert_company(&self, input: &CreateCompany) -> StoreResult<Company> {
        Ok(CompanyRepo::create(&self.pool, input).await?)
    }

    async fn update_company(
        &self,
        id: DbId,
        input: &UpdateCompany,
    ) -> StoreResult<Option<Company>> {
        Ok(CompanyRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_company(&self, id: DbId) -> StoreResult<bool> {
        Ok(CompanyRepo::delete(&self.pool, id).await?)
    }
}

impl UserStore for PgStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(UserRepo::list(&self.pool).await?)
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn list_users_by_company(&self, company_id: DbId) -> StoreResult<Vec<User>> {
        Ok(UserRepo::list_by_company(&self.pool, company_id).await?)
    }

    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn update_user(&self, id: DbId, input: &UpdateUser) -> StoreResult<Option<User>> {
        Ok(UserRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        Ok(UserRepo::delete(&self.pool, id).await?)
    }
}

impl GameStore for PgStore {
    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        Ok(GameRepo::list(&self.pool).await?)
    }

    async fn find_game(&self, id: DbId) -> StoreResult<Option<Game>> {
        Ok(GameRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_games_by_active(&self, active: bool) -> StoreResult<Vec<Game>> {
        Ok(GameRepo::list_by_active(&self.pool, active).await?)
    }

    async fn list_games_by_type(&self, game_type: &str) -> StoreResult<Vec<Game>> {
        Ok(GameRepo::list_by_type(&self.pool, game_type).await?)
    }

    async fn insert_game(&self, input: &CreateGame) -> StoreResult<Game> {
        Ok(GameRepo::create(&self.pool, input).await?)
    }

    async fn update_game(&self, id: DbId, input: &UpdateGame) -> StoreResult<Option<Game>> {
        Ok(GameRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_game(&self, id: DbId) -> StoreResult<bool> {
        Ok(GameRepo::delete(&self.pool, id).await?)
    }
}

impl AssessmentStore for PgStore {
    async fn list_assessments(&self) -> StoreResult<Vec<Assessment>> {
        Ok(AssessmentRepo::list(&self.pool).await?)
    }

    async fn find_assessment(&self, id: DbId) -> StoreResult<Option<Assessment>> {
        Ok(AssessmentRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_assessments_by_candidate(
        &self,
        candidate_id: DbId,
    ) -> StoreResult<Vec<Assessment>> {
        Ok(AssessmentRepo::list_by_candidate(&self.pool, candidate_id).await?)
    }

    async fn list_assessments_by_hr(&self, hr_id: DbId) -> StoreResult<Vec<Assessment>> {
        Ok(AssessmentRepo::list_by_hr(&self.pool, hr_id).await?)
    }

    async fn list_assessments_by_status(&self, status: &str) -> StoreResult<Vec<Assessment>> {
        Ok(AssessmentRepo::list_by_status(&self.pool, status).await?)
    }

    async fn insert_assessment(&self, input: &NewAssessment) -> StoreResult<Assessment> {
        Ok(AssessmentRepo::create(&self.pool, input).await?)
    }

    async fn update_assessment(
        &self,
        id: DbId,
        input: &UpdateAssessment,
        updated_at: Timestamp,
    ) -> StoreResult<Option<Assessment>> {
        Ok(AssessmentRepo::update(&self.pool, id, input, updated_at).await?)
    }

    async fn delete_assessment(&self, id: DbId) -> StoreResult<bool> {
        Ok(AssessmentRepo::delete(&self.pool, id).await?)
    }
}

impl ScoreStore for PgStore {
    async fn list_scores(&self) -> StoreResult<Vec<Score>> {
        Ok(ScoreRepo::list(&self.pool).await?)
    }

    async fn find_score(&self, id: DbId) -> StoreResult<Option<Score>> {
        Ok(ScoreRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_score_by_assessment(&self, assessment_id: DbId) -> StoreResult<Option<Score>> {
        Ok(ScoreRepo::find_by_assessment(&self.pool, assessment_id).await?)
    }

    async fn list_scores_by_candidate(&self, candidate_id: DbId) -> StoreResult<Vec<Score>> {
        Ok(ScoreRepo::list_by_candidate(&self.pool, candidate_id).await?)
    }

    async fn insert_score(&self, input: &NewScore) -> StoreResult<Score> {
        Ok(ScoreRepo::create(&self.pool, input).await?)
    }

    async fn update_score(&self, id: DbId, input: &UpdateScore) -> StoreResult<Option<Score>> {
        Ok(ScoreRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_score(&self, id: DbId) -> StoreResult<bool> {
        Ok(ScoreRepo::delete(&self.pool, id).await?)
    }
}

impl ReportStore for PgStore {
    async fn list_reports(&self) -> StoreResult<Vec<Report>> {
        Ok(ReportRepo::list(&self.pool).await?)
    }

    async fn find_report(&self, id: DbId) -> StoreResult<Option<Report>> {
        Ok(ReportRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_reports_by_user(&self, user_id: DbId) -> StoreResult<Vec<Report>> {
        Ok(ReportRepo::list_by_user(&self.pool, user_id).await?)
    }

    async fn insert_report(&self, input: &NewReport) -> StoreResult<Report> {
        Ok(ReportRepo::create(&self.pool, input).await?)
    }

    async fn update_report(&self, id: DbId, input: &UpdateReport) -> StoreResult<Option<Report>> {
        Ok(ReportRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_report(&self, id: DbId) -> StoreResult<bool> {
        Ok(ReportRepo::delete(&self.pool, id).await?)
    }
}

impl ReviewStore for PgStore {
    async fn list_reviews(&self) -> StoreResult<Vec<Review>> {
        Ok(ReviewRepo::list(&self.pool).await?)
    }

    async fn find_review(&self, id: DbId) -> StoreResult<Option<Review>> {
        Ok(ReviewRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_reviews_by_user(&self, user_id: DbId) -> StoreResult<Vec<Review>> {
        Ok(ReviewRepo::list_by_user(&self.pool, user_id).await?)
    }

    async fn insert_review(&self, input: &CreateReview) -> StoreResult<Review> {
        Ok(ReviewRepo::create(&self.pool, input).await?)
    }

    async fn update_review(&self, id: DbId, input: &UpdateReview) -> StoreResult<Option<Review>> {
        Ok(ReviewRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_review(&self, id: DbId) -> StoreResult<bool> {
        Ok(ReviewRepo::delete(&self.pool, id).await?)
    }
}
