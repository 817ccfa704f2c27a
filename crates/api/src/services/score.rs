//! Score recording. `completedAt` is stamped once, at creation.

use chrono::Utc;
use skillcheck_core::error::CoreError;
use skillcheck_core::stamping::completion_stamp;
use skillcheck_core::types::DbId;
use skillcheck_core::validation::validate_input;
use skillcheck_db::models::score::{CreateScore, NewScore, Score, UpdateScore};
use skillcheck_db::store::ScoreStore;

use super::not_found;
use crate::error::{AppError, AppResult};

const ENTITY: &str = "Score";

pub struct ScoreService<'a, S> {
    store: &'a S,
}

impl<'a, S: ScoreStore> ScoreService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Score>> {
        Ok(self.store.list_scores().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Score> {
        self.store
            .find_score(id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    /// The score recorded for an assessment. When several exist the one
    /// with the lowest id is returned.
    pub async fn get_by_assessment(&self, assessment_id: DbId) -> AppResult<Score> {
        self.store
            .find_score_by_assessment(assessment_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundByKey {
                    entity: ENTITY,
                    field: "assessmentId",
                    value: assessment_id.to_string(),
                })
            })
    }

    pub async fn list_by_candidate(&self, candidate_id: DbId) -> AppResult<Vec<Score>> {
        Ok(self.store.list_scores_by_candidate(candidate_id).await?)
    }

    /// Record a score. The referenced assessment is not checked and its
    /// status is left alone.
    pub async fn create(&self, input: CreateScore) -> AppResult<Score> {
        validate_input(&input)?;

        let new = NewScore {
            assessment_id: input.assessment_id,
            candidate_id: input.candidate_id,
            score: input.score,
            feedback: input.feedback,
            completed_at: completion_stamp(Utc::now()),
            game_data: input.game_data,
        };

        let score = self.store.insert_score(&new).await?;
        tracing::info!(
            score_id = score.score_id,
            assessment_id = score.assessment_id,
            "Score recorded"
        );
        Ok(score)
    }

    pub async fn update(&self, id: DbId, input: UpdateScore) -> AppResult<Score> {
        validate_input(&input)?;

        let score = self
            .store
            .update_score(id, &input)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;
        tracing::info!(score_id = id, "Score updated");
        Ok(score)
    }

    /// Remove a score. Reports built from it are left in place.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_score(id).await? {
            return Err(not_found(ENTITY, id));
        }
        tracing::info!(score_id = id, "Score deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use skillcheck_db::store::MemoryStore;

    use super::*;

    fn input(assessment_id: DbId, score: &str) -> CreateScore {
        CreateScore {
            assessment_id,
            candidate_id: 2,
            score: score.into(),
            feedback: None,
            game_data: Some(r#"{"level":3}"#.into()),
        }
    }

    #[tokio::test]
    async fn update_keeps_completed_at() {
        let store = MemoryStore::new();
        let service = ScoreService::new(&store);
        let created = service.create(input(7, "85")).await.unwrap();

        let updated = service
            .update(
                created.score_id,
                UpdateScore {
                    score: Some("90".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.score, "90");
        assert_eq!(updated.completed_at, created.completed_at);
        assert_eq!(updated.game_data, created.game_data);
    }

    #[tokio::test]
    async fn lookup_by_assessment() {
        let store = MemoryStore::new();
        let service = ScoreService::new(&store);
        let first = service.create(input(7, "85")).await.unwrap();
        service.create(input(7, "70")).await.unwrap();

        assert_eq!(service.get_by_assessment(7).await.unwrap(), first);
        assert_matches!(
            service.get_by_assessment(999).await,
            Err(AppError::Core(CoreError::NotFoundByKey { .. }))
        );
    }

    #[tokio::test]
    async fn blank_score_is_rejected() {
        let store = MemoryStore::new();
        let service = ScoreService::new(&store);

        assert_matches!(
            service.create(input(7, " ")).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
        assert!(service.list_all().await.unwrap().is_empty());
    }
}
