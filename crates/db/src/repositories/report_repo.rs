//! Repository for the `reports` table.

use skillcheck_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{NewReport, Report, UpdateReport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "report_id, user_id, score_id, fullname, email, score, skill_type, feedback, created_at";

/// Provides CRUD operations for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a stamped report, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports
                (user_id, score_id, fullname, email, score, skill_type, feedback, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(input.user_id)
            .bind(input.score_id)
            .bind(&input.fullname)
            .bind(&input.email)
            .bind(&input.score)
            .bind(&input.skill_type)
            .bind(&input.feedback)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a report by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE report_id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reports ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports ORDER BY report_id");
        sqlx::query_as::<_, Report>(&query).fetch_all(pool).await
    }

    /// List reports addressed to a user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE user_id = $1 ORDER BY report_id");
        sqlx::query_as::<_, Report>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a report. Only non-`None` fields in `input` are applied.
    /// `created_at` is never touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReport,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET
                user_id = COALESCE($2, user_id),
                score_id = COALESCE($3, score_id),
                fullname = COALESCE($4, fullname),
                email = COALESCE($5, email),
                score = COALESCE($6, score),
                skill_type = COALESCE($7, skill_type),
                feedback = COALESCE($8, feedback)
             WHERE report_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.score_id)
            .bind(&input.fullname)
            .bind(&input.email)
            .bind(&input.score)
            .bind(&input.skill_type)
            .bind(&input.feedback)
            .fetch_optional(pool)
            .await
    }

    /// Delete a report by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE report_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
