//! Feedback reports derived from a score.

use chrono::Utc;
use skillcheck_core::stamping::creation_stamp;
use skillcheck_core::types::DbId;
use skillcheck_core::validation::validate_input;
use skillcheck_db::models::report::{CreateReport, NewReport, Report, UpdateReport};
use skillcheck_db::store::ReportStore;

use super::not_found;
use crate::error::AppResult;

const ENTITY: &str = "Report";

pub struct ReportService<'a, S> {
    store: &'a S,
}

impl<'a, S: ReportStore> ReportService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Report>> {
        Ok(self.store.list_reports().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Report> {
        self.store
            .find_report(id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub async fn list_by_user(&self, user_id: DbId) -> AppResult<Vec<Report>> {
        Ok(self.store.list_reports_by_user(user_id).await?)
    }

    /// Create a report. The denormalized candidate fields are stored as
    /// given; they are not re-derived from the score or the user.
    pub async fn create(&self, input: CreateReport) -> AppResult<Report> {
        validate_input(&input)?;

        let new = NewReport {
            user_id: input.user_id,
            score_id: input.score_id,
            fullname: input.fullname,
            email: input.email,
            score: input.score,
            skill_type: input.skill_type,
            feedback: input.feedback,
            created_at: creation_stamp(Utc::now()).created_at,
        };

        let report = self.store.insert_report(&new).await?;
        tracing::info!(
            report_id = report.report_id,
            score_id = report.score_id,
            "Report created"
        );
        Ok(report)
    }

    pub async fn update(&self, id: DbId, input: UpdateReport) -> AppResult<Report> {
        validate_input(&input)?;

        let report = self
            .store
            .update_report(id, &input)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;
        tracing::info!(report_id = id, "Report updated");
        Ok(report)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_report(id).await? {
            return Err(not_found(ENTITY, id));
        }
        tracing::info!(report_id = id, "Report deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use skillcheck_db::store::MemoryStore;

    use super::*;

    fn input(user_id: DbId) -> CreateReport {
        CreateReport {
            user_id,
            score_id: 1,
            fullname: Some("Cand Idate".into()),
            email: Some("cand@example.com".into()),
            score: Some("85".into()),
            skill_type: Some("Logic".into()),
            feedback: None,
        }
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let store = MemoryStore::new();
        let service = ReportService::new(&store);
        let created = service.create(input(1)).await.unwrap();

        let updated = service
            .update(
                created.report_id,
                UpdateReport {
                    feedback: Some("Strong pattern recognition".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.feedback.as_deref(), Some("Strong pattern recognition"));
        assert_eq!(updated.fullname, created.fullname);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn list_by_user_filters() {
        let store = MemoryStore::new();
        let service = ReportService::new(&store);
        let mine = service.create(input(1)).await.unwrap();
        service.create(input(2)).await.unwrap();

        assert_eq!(service.list_by_user(1).await.unwrap(), vec![mine]);
        assert!(service.list_by_user(3).await.unwrap().is_empty());
    }
}
