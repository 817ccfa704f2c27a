//! Repository for the `assessments` table.

use skillcheck_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::assessment::{Assessment, NewAssessment, UpdateAssessment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, hr_id, candidate_id, game_id, company_id, status, created_at, updated_at, due_date";

/// Provides CRUD operations for assessments.
pub struct AssessmentRepo;

impl AssessmentRepo {
    /// Insert a stamped assessment, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAssessment) -> Result<Assessment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assessments
                (hr_id, candidate_id, game_id, company_id, status, created_at, updated_at, due_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(input.hr_id)
            .bind(input.candidate_id)
            .bind(input.game_id)
            .bind(input.company_id)
            .bind(&input.status)
            .bind(input.created_at)
            .bind(input.updated_at)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find an assessment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE id = $1");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assessments ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments ORDER BY id");
        sqlx::query_as::<_, Assessment>(&query).fetch_all(pool).await
    }

    /// List assessments assigned to a candidate.
    pub async fn list_by_candidate(
        pool: &PgPool,
        candidate_id: DbId,
    ) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE candidate_id = $1 ORDER BY id");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(candidate_id)
            .fetch_all(pool)
            .await
    }

    /// List assessments created by an HR user.
    pub async fn list_by_hr(pool: &PgPool, hr_id: DbId) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE hr_id = $1 ORDER BY id");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(hr_id)
            .fetch_all(pool)
            .await
    }

    /// List assessments in a given status.
    pub async fn list_by_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE status = $1 ORDER BY id");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Update an assessment. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always overwritten with the given value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssessment,
        updated_at: Timestamp,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "UPDATE assessments SET
                hr_id = COALESCE($2, hr_id),
                candidate_id = COALESCE($3, candidate_id),
                game_id = COALESCE($4, game_id),
                company_id = COALESCE($5, company_id),
                status = COALESCE($6, status),
                due_date = COALESCE($7, due_date),
                updated_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .bind(input.hr_id)
            .bind(input.candidate_id)
            .bind(input.game_id)
            .bind(input.company_id)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(updated_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assessment by ID. Returns `true` if a row was removed.
    ///
    /// Scores and reports that reference the assessment are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
