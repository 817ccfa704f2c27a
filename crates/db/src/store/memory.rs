//! In-process store.
//!
//! Rows live in ordered maps behind a single `RwLock`, so every write is
//! atomic with respect to every other. Identity counters start at 1 per
//! table and never reuse a value, mirroring `BIGSERIAL`. The unique
//! constraints and the company-to-users cascade from the migrations are
//! enforced here as well.

use std::collections::BTreeMap;
use std::sync::Arc;

use skillcheck_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use super::{
    AssessmentStore, CompanyStore, GameStore, ReportStore, ReviewStore, ScoreStore, StoreError,
    StoreHealth, StoreResult, UserStore, UQ_COMPANY_NUMBER, UQ_USER_EMAIL,
};
use crate::models::assessment::{Assessment, NewAssessment, UpdateAssessment};
use crate::models::company::{Company, CreateCompany, UpdateCompany};
use crate::models::game::{CreateGame, Game, UpdateGame};
use crate::models::report::{NewReport, Report, UpdateReport};
use crate::models::review::{CreateReview, Review, UpdateReview};
use crate::models::score::{NewScore, Score, UpdateScore};
use crate::models::user::{CreateUser, UpdateUser, User};

/// One table: rows keyed by identity plus the identity sequence.
struct Table<T> {
    last_id: DbId,
    rows: BTreeMap<DbId, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| pred(*r)).cloned().collect()
    }

    fn remove(&mut self, id: DbId) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Default)]
struct Tables {
    companies: Table<Company>,
    users: Table<User>,
    games: Table<Game>,
    assessments: Table<Assessment>,
    scores: Table<Score>,
    reports: Table<Report>,
    reviews: Table<Review>,
}

impl Tables {
    fn company_number_taken(&self, number: &str, except: Option<DbId>) -> bool {
        self.companies
            .rows
            .values()
            .any(|c| c.company_number == number && Some(c.id) != except)
    }

    fn email_taken(&self, email: &str, except: Option<DbId>) -> bool {
        self.users
            .rows
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

fn unique_violation(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

/// Store that keeps all rows in memory. Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreHealth for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

impl CompanyStore for MemoryStore {
    async fn list_companies(&self) -> StoreResult<Vec<Company>> {
        Ok(self.tables.read().await.companies.all())
    }

    async fn find_company(&self, id: DbId) -> StoreResult<Option<Company>> {
        Ok(self.tables.read().await.companies.get(id))
    }

    async fn find_company_by_number(&self, company_number: &str) -> StoreResult<Option<Company>> {
        let tables = self.tables.read().await;
        Ok(tables
            .companies
            .rows
            .values()
            .find(|c| c.company_number == company_number)
            .cloned())
    }

    async fn insert_company(&self, input: &CreateCompany) -> StoreResult<Company> {
        let mut tables = self.tables.write().await;
        if tables.company_number_taken(&input.company_number, None) {
            return Err(unique_violation(UQ_COMPANY_NUMBER));
        }
        let id = tables.companies.next_id();
        let company = Company {
            id,
            company_name: input.company_name.clone(),
            company_number: input.company_number.clone(),
        };
        tables.companies.rows.insert(id, company.clone());
        Ok(company)
    }

    async fn update_company(
        &self,
        id: DbId,
        input: &UpdateCompany,
    ) -> StoreResult<Option<Company>> {
        let mut tables = self.tables.write().await;
        if let Some(number) = &input.company_number {
            if tables.company_number_taken(number, Some(id)) {
                return Err(unique_violation(UQ_COMPANY_NUMBER));
            }
        }
        let Some(company) = tables.companies.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.company_name {
            company.company_name = name.clone();
        }
        if let Some(number) = &input.company_number {
            company.company_number = number.clone();
        }
        Ok(Some(company.clone()))
    }

    async fn delete_company(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.companies.remove(id) {
            return Ok(false);
        }
        tables.users.rows.retain(|_, u| u.company_id != Some(id));
        Ok(true)
    }
}

impl UserStore for MemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables.read().await.users.all())
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(id))
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.rows.values().find(|u| u.email == email).cloned())
    }

    async fn list_users_by_company(&self, company_id: DbId) -> StoreResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.filter(|u| u.company_id == Some(company_id)))
    }

    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&input.email, None) {
            return Err(unique_violation(UQ_USER_EMAIL));
        }
        let id = tables.users.next_id();
        let user = User {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            role: input.role.clone(),
            company_id: input.company_id,
        };
        tables.users.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: DbId, input: &UpdateUser) -> StoreResult<Option<User>> {
        let mut tables = self.tables.write().await;
        if let Some(email) = &input.email {
            if tables.email_taken(email, Some(id)) {
                return Err(unique_violation(UQ_USER_EMAIL));
            }
        }
        let Some(user) = tables.users.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = &input.first_name {
            user.first_name = v.clone();
        }
        if let Some(v) = &input.last_name {
            user.last_name = v.clone();
        }
        if let Some(v) = &input.email {
            user.email = v.clone();
        }
        if let Some(v) = &input.role {
            user.role = v.clone();
        }
        if input.company_id.is_some() {
            user.company_id = input.company_id;
        }
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.users.remove(id))
    }
}

impl GameStore for MemoryStore {
    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        Ok(self.tables.read().await.games.all())
    }

    async fn find_game(&self, id: DbId) -> StoreResult<Option<Game>> {
        Ok(self.tables.read().await.games.get(id))
    }

    async fn list_games_by_active(&self, active: bool) -> StoreResult<Vec<Game>> {
        Ok(self.tables.read().await.games.filter(|g| g.active == active))
    }

    async fn list_games_by_type(&self, game_type: &str) -> StoreResult<Vec<Game>> {
        Ok(self
            .tables
            .read()
            .await
            .games
            .filter(|g| g.game_type == game_type))
    }

    async fn insert_game(&self, input: &CreateGame) -> StoreResult<Game> {
        let mut tables = self.tables.write().await;
        let id = tables.games.next_id();
        let game = Game {
            id,
            game_name: input.game_name.clone(),
            game_description: input.game_description.clone(),
            skill_name: input.skill_name.clone(),
            game_url: input.game_url.clone(),
            game_image: input.game_image.clone(),
            active: input.active.unwrap_or(true),
            game_type: input.game_type.clone(),
        };
        tables.games.rows.insert(id, game.clone());
        Ok(game)
    }

    async fn update_game(&self, id: DbId, input: &UpdateGame) -> StoreResult<Option<Game>> {
        let mut tables = self.tables.write().await;
        let Some(game) = tables.games.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = &input.game_name {
            game.game_name = v.clone();
        }
        if let Some(v) = &input.game_description {
            game.game_description = v.clone();
        }
        if let Some(v) = &input.skill_name {
            game.skill_name = v.clone();
        }
        if let Some(v) = &input.game_url {
            game.game_url = v.clone();
        }
        if let Some(v) = &input.game_image {
            game.game_image = v.clone();
        }
        if let Some(v) = input.active {
            game.active = v;
        }
        if let Some(v) = &input.game_type {
            game.game_type = v.clone();
        }
        Ok(Some(game.clone()))
    }

    async fn delete_game(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.games.remove(id))
    }
}

impl AssessmentStore for MemoryStore {
    async fn list_assessments(&self) -> StoreResult<Vec<Assessment>> {
        Ok(self.tables.read().await.assessments.all())
    }

    async fn find_assessment(&self, id: DbId) -> StoreResult<Option<Assessment>> {
        Ok(self.tables.read().await.assessments.get(id))
    }

    async fn list_assessments_by_candidate(
        &self,
        candidate_id: DbId,
    ) -> StoreResult<Vec<Assessment>> {
        let tables = self.tables.read().await;
        Ok(tables.assessments.filter(|a| a.candidate_id == candidate_id))
    }

    async fn list_assessments_by_hr(&self, hr_id: DbId) -> StoreResult<Vec<Assessment>> {
        let tables = self.tables.read().await;
        Ok(tables.assessments.filter(|a| a.hr_id == hr_id))
    }

    async fn list_assessments_by_status(&self, status: &str) -> StoreResult<Vec<Assessment>> {
        let tables = self.tables.read().await;
        Ok(tables.assessments.filter(|a| a.status == status))
    }

    async fn insert_assessment(&self, input: &NewAssessment) -> StoreResult<Assessment> {
        let mut tables = self.tables.write().await;
        let id = tables.assessments.next_id();
        let assessment = Assessment {
            id,
            hr_id: input.hr_id,
            candidate_id: input.candidate_id,
            game_id: input.game_id,
            company_id: input.company_id,
            status: input.status.clone(),
            created_at: input.created_at,
            updated_at: input.updated_at,
            due_date: input.due_date,
        };
        tables.assessments.rows.insert(id, assessment.clone());
        Ok(assessment)
    }

    async fn update_assessment(
        &self,
        id: DbId,
        input: &UpdateAssessment,
        updated_at: Timestamp,
    ) -> StoreResult<Option<Assessment>> {
        let mut tables = self.tables.write().await;
        let Some(a) = tables.assessments.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = input.hr_id {
            a.hr_id = v;
        }
        if let Some(v) = input.candidate_id {
            a.candidate_id = v;
        }
        if let Some(v) = input.game_id {
            a.game_id = v;
        }
        if let Some(v) = input.company_id {
            a.company_id = v;
        }
        if let Some(v) = &input.status {
            a.status = v.clone();
        }
        if input.due_date.is_some() {
            a.due_date = input.due_date;
        }
        a.updated_at = updated_at;
        Ok(Some(a.clone()))
    }

    async fn delete_assessment(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.assessments.remove(id))
    }
}

impl ScoreStore for MemoryStore {
    async fn list_scores(&self) -> StoreResult<Vec<Score>> {
        Ok(self.tables.read().await.scores.all())
    }

    async fn find_score(&self, id: DbId) -> StoreResult<Option<Score>> {
        Ok(self.tables.read().await.scores.get(id))
    }

    async fn find_score_by_assessment(&self, assessment_id: DbId) -> StoreResult<Option<Score>> {
        let tables = self.tables.read().await;
        Ok(tables
            .scores
            .rows
            .values()
            .find(|s| s.assessment_id == assessment_id)
            .cloned())
    }

    async fn list_scores_by_candidate(&self, candidate_id: DbId) -> StoreResult<Vec<Score>> {
        let tables = self.tables.read().await;
        Ok(tables.scores.filter(|s| s.candidate_id == candidate_id))
    }

    async fn insert_score(&self, input: &NewScore) -> StoreResult<Score> {
        let mut tables = self.tables.write().await;
        let score_id = tables.scores.next_id();
        let score = Score {
            score_id,
            assessment_id: input.assessment_id,
            candidate_id: input.candidate_id,
            score: input.score.clone(),
            feedback: input.feedback.clone(),
            completed_at: input.completed_at,
            game_data: input.game_data.clone(),
        };
        tables.scores.rows.insert(score_id, score.clone());
        Ok(score)
    }

    async fn update_score(&self, id: DbId, input: &UpdateScore) -> StoreResult<Option<Score>> {
        let mut tables = self.tables.write().await;
        let Some(s) = tables.scores.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = input.assessment_id {
            s.assessment_id = v;
        }
        if let Some(v) = input.candidate_id {
            s.candidate_id = v;
        }
        if let Some(v) = &input.score {
            s.score = v.clone();
        }
        if input.feedback.is_some() {
            s.feedback = input.feedback.clone();
        }
        if input.game_data.is_some() {
            s.game_data = input.game_data.clone();
        }
        Ok(Some(s.clone()))
    }

    async fn delete_score(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.scores.remove(id))
    }
}

impl ReportStore for MemoryStore {
    async fn list_reports(&self) -> StoreResult<Vec<Report>> {
        Ok(self.tables.read().await.reports.all())
    }

    async fn find_report(&self, id: DbId) -> StoreResult<Option<Report>> {
        Ok(self.tables.read().await.reports.get(id))
    }

    async fn list_reports_by_user(&self, user_id: DbId) -> StoreResult<Vec<Report>> {
        let tables = self.tables.read().await;
        Ok(tables.reports.filter(|r| r.user_id == user_id))
    }

    async fn insert_report(&self, input: &NewReport) -> StoreResult<Report> {
        let mut tables = self.tables.write().await;
        let report_id = tables.reports.next_id();
        let report = Report {
            report_id,
            user_id: input.user_id,
            score_id: input.score_id,
            fullname: input.fullname.clone(),
            email: input.email.clone(),
            score: input.score.clone(),
            skill_type: input.skill_type.clone(),
            feedback: input.feedback.clone(),
            created_at: input.created_at,
        };
        tables.reports.rows.insert(report_id, report.clone());
        Ok(report)
    }

    async fn update_report(&self, id: DbId, input: &UpdateReport) -> StoreResult<Option<Report>> {
        let mut tables = self.tables.write().await;
        let Some(r) = tables.reports.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = input.user_id {
            r.user_id = v;
        }
        if let Some(v) = input.score_id {
            r.score_id = v;
        }
        if input.fullname.is_some() {
            r.fullname = input.fullname.clone();
        }
        if input.email.is_some() {
            r.email = input.email.clone();
        }
        if input.score.is_some() {
            r.score = input.score.clone();
        }
        if input.skill_type.is_some() {
            r.skill_type = input.skill_type.clone();
        }
        if input.feedback.is_some() {
            r.feedback = input.feedback.clone();
        }
        Ok(Some(r.clone()))
    }

    async fn delete_report(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.reports.remove(id))
    }
}

impl ReviewStore for MemoryStore {
    async fn list_reviews(&self) -> StoreResult<Vec<Review>> {
        Ok(self.tables.read().await.reviews.all())
    }

    async fn find_review(&self, id: DbId) -> StoreResult<Option<Review>> {
        Ok(self.tables.read().await.reviews.get(id))
    }

    async fn list_reviews_by_user(&self, user_id: DbId) -> StoreResult<Vec<Review>> {
        let tables = self.tables.read().await;
        Ok(tables.reviews.filter(|r| r.user_id == user_id))
    }

    async fn insert_review(&self, input: &CreateReview) -> StoreResult<Review> {
        let mut tables = self.tables.write().await;
        let review_id = tables.reviews.next_id();
        let review = Review {
            review_id,
            user_id: input.user_id,
            message: input.message.clone(),
        };
        tables.reviews.rows.insert(review_id, review.clone());
        Ok(review)
    }

    async fn update_review(&self, id: DbId, input: &UpdateReview) -> StoreResult<Option<Review>> {
        let mut tables = self.tables.write().await;
        let Some(r) = tables.reviews.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = input.user_id {
            r.user_id = v;
        }
        if let Some(v) = &input.message {
            r.message = v.clone();
        }
        Ok(Some(r.clone()))
    }

    async fn delete_review(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.reviews.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn company(name: &str, number: &str) -> CreateCompany {
        CreateCompany {
            company_name: name.to_string(),
            company_number: number.to_string(),
        }
    }

    fn recruiter(email: &str, company_id: DbId) -> CreateUser {
        CreateUser {
            first_name: "Rita".to_string(),
            last_name: "Recruiter".to_string(),
            email: email.to_string(),
            role: "RECRUITER".to_string(),
            company_id: Some(company_id),
        }
    }

    #[tokio::test]
    async fn identities_start_at_one_and_are_not_reused() {
        let store = MemoryStore::new();
        let a = store.insert_company(&company("A", "1")).await.unwrap();
        assert_eq!(a.id, 1);
        assert!(store.delete_company(a.id).await.unwrap());
        let b = store.insert_company(&company("B", "2")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn duplicate_company_number_is_unique_violation() {
        let store = MemoryStore::new();
        store.insert_company(&company("Acme", "C-100")).await.unwrap();
        let err = store
            .insert_company(&company("Acme2", "C-100"))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::UniqueViolation { constraint } if constraint == UQ_COMPANY_NUMBER);
    }

    #[tokio::test]
    async fn renaming_company_to_its_own_number_is_allowed() {
        let store = MemoryStore::new();
        let c = store.insert_company(&company("Acme", "C-1")).await.unwrap();
        let input = UpdateCompany {
            company_name: Some("Acme Ltd".into()),
            company_number: Some("C-1".into()),
        };
        let updated = store.update_company(c.id, &input).await.unwrap().unwrap();
        assert_eq!(updated.company_name, "Acme Ltd");
    }

    #[tokio::test]
    async fn deleting_company_removes_only_its_recruiters() {
        let store = MemoryStore::new();
        let acme = store.insert_company(&company("Acme", "1")).await.unwrap();
        let other = store.insert_company(&company("Other", "2")).await.unwrap();
        store.insert_user(&recruiter("a@acme.io", acme.id)).await.unwrap();
        store.insert_user(&recruiter("b@acme.io", acme.id)).await.unwrap();
        let kept = store.insert_user(&recruiter("c@other.io", other.id)).await.unwrap();

        assert!(store.delete_company(acme.id).await.unwrap());

        let users = store.list_users().await.unwrap();
        assert_eq!(users, vec![kept]);
    }

    #[tokio::test]
    async fn duplicate_email_is_unique_violation() {
        let store = MemoryStore::new();
        let c = store.insert_company(&company("Acme", "1")).await.unwrap();
        store.insert_user(&recruiter("a@acme.io", c.id)).await.unwrap();
        let err = store
            .insert_user(&recruiter("a@acme.io", c.id))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::UniqueViolation { .. });
    }

    #[tokio::test]
    async fn score_lookup_by_assessment_returns_lowest_id() {
        let store = MemoryStore::new();
        let now = chrono::Utc::now();
        let new_score = |score: &str| NewScore {
            assessment_id: 7,
            candidate_id: 2,
            score: score.to_string(),
            feedback: None,
            completed_at: now,
            game_data: None,
        };
        let first = store.insert_score(&new_score("85")).await.unwrap();
        store.insert_score(&new_score("90")).await.unwrap();

        let found = store.find_score_by_assessment(7).await.unwrap().unwrap();
        assert_eq!(found.score_id, first.score_id);
        assert!(store.find_score_by_assessment(999).await.unwrap().is_none());
    }
}
