//! Assessment lifecycle: creation in `PENDING`, caller-driven status
//! changes, and the timestamp rules around both.

use chrono::Utc;
use skillcheck_core::assessment::{validate_status, AssessmentStatus};
use skillcheck_core::stamping::{creation_stamp, refresh_stamp};
use skillcheck_core::types::DbId;
use skillcheck_core::validation::validate_input;
use skillcheck_db::models::assessment::{
    Assessment, CreateAssessment, NewAssessment, UpdateAssessment,
};
use skillcheck_db::store::AssessmentStore;

use super::not_found;
use crate::error::AppResult;

const ENTITY: &str = "Assessment";

pub struct AssessmentService<'a, S> {
    store: &'a S,
}

impl<'a, S: AssessmentStore> AssessmentService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Assessment>> {
        Ok(self.store.list_assessments().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Assessment> {
        self.store
            .find_assessment(id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub async fn list_by_candidate(&self, candidate_id: DbId) -> AppResult<Vec<Assessment>> {
        Ok(self.store.list_assessments_by_candidate(candidate_id).await?)
    }

    pub async fn list_by_hr(&self, hr_id: DbId) -> AppResult<Vec<Assessment>> {
        Ok(self.store.list_assessments_by_hr(hr_id).await?)
    }

    /// List assessments in `status`. Unknown status strings are rejected
    /// rather than answered with an empty list.
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<Assessment>> {
        let status: AssessmentStatus = status.parse()?;
        Ok(self
            .store
            .list_assessments_by_status(status.as_str())
            .await?)
    }

    /// Create an assessment. Status is always `PENDING` and both timestamps
    /// are set to the same instant.
    pub async fn create(&self, input: CreateAssessment) -> AppResult<Assessment> {
        validate_input(&input)?;

        let stamp = creation_stamp(Utc::now());
        let new = NewAssessment {
            hr_id: input.hr_id,
            candidate_id: input.candidate_id,
            game_id: input.game_id,
            company_id: input.company_id,
            status: AssessmentStatus::INITIAL.as_str().to_string(),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            due_date: input.due_date,
        };

        let assessment = self.store.insert_assessment(&new).await?;
        tracing::info!(
            assessment_id = assessment.id,
            candidate_id = assessment.candidate_id,
            "Assessment created"
        );
        Ok(assessment)
    }

    /// Apply a partial update and refresh `updated_at`. `created_at` is
    /// never touched.
    pub async fn update(&self, id: DbId, input: UpdateAssessment) -> AppResult<Assessment> {
        validate_input(&input)?;
        if let Some(status) = &input.status {
            validate_status(status)?;
        }

        let existing = self.get(id).await?;
        let updated_at = refresh_stamp(existing.created_at, Utc::now());

        let assessment = self
            .store
            .update_assessment(id, &input, updated_at)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;

        if existing.status != assessment.status {
            tracing::info!(
                assessment_id = id,
                from = %existing.status,
                to = %assessment.status,
                "Assessment status changed"
            );
        } else {
            tracing::info!(assessment_id = id, "Assessment updated");
        }
        Ok(assessment)
    }

    /// Remove an assessment. Scores recorded against it are left in place.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_assessment(id).await? {
            return Err(not_found(ENTITY, id));
        }
        tracing::info!(assessment_id = id, "Assessment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use skillcheck_core::error::CoreError;
    use skillcheck_db::store::MemoryStore;

    use super::*;
    use crate::error::AppError;

    fn input(candidate_id: DbId) -> CreateAssessment {
        CreateAssessment {
            hr_id: 1,
            candidate_id,
            game_id: 3,
            company_id: 4,
            due_date: None,
        }
    }

    #[tokio::test]
    async fn create_starts_pending_with_equal_timestamps() {
        let store = MemoryStore::new();
        let service = AssessmentService::new(&store);

        let created = service.create(input(2)).await.unwrap();

        assert_eq!(created.status, "PENDING");
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn update_changes_status_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let service = AssessmentService::new(&store);
        let created = service.create(input(2)).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateAssessment {
                    status: Some("COMPLETED".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "COMPLETED");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.candidate_id, created.candidate_id);
    }

    #[tokio::test]
    async fn update_rejects_unknown_status() {
        let store = MemoryStore::new();
        let service = AssessmentService::new(&store);
        let created = service.create(input(2)).await.unwrap();

        let err = service
            .update(
                created.id,
                UpdateAssessment {
                    status: Some("ARCHIVED".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
        assert_eq!(service.get(created.id).await.unwrap().status, "PENDING");
    }

    #[tokio::test]
    async fn missing_assessment_is_not_found() {
        let store = MemoryStore::new();
        let service = AssessmentService::new(&store);

        assert_matches!(
            service.get(42).await,
            Err(AppError::Core(CoreError::NotFound { id: 42, .. }))
        );
        assert_matches!(
            service.update(42, UpdateAssessment::default()).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert_matches!(
            service.delete(42).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn filters_by_candidate_and_status() {
        let store = MemoryStore::new();
        let service = AssessmentService::new(&store);
        let first = service.create(input(2)).await.unwrap();
        service.create(input(5)).await.unwrap();

        let by_candidate = service.list_by_candidate(2).await.unwrap();
        assert_eq!(by_candidate, vec![first]);

        assert_eq!(service.list_by_status("PENDING").await.unwrap().len(), 2);
        assert!(service.list_by_status("EXPIRED").await.unwrap().is_empty());
        assert_matches!(
            service.list_by_status("pending").await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}
