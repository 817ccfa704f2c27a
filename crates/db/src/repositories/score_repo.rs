//! Repository for the `scores` table.

use skillcheck_core::types::DbId;
use sqlx::PgPool;

use crate::models::score::{NewScore, Score, UpdateScore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "score_id, assessment_id, candidate_id, score, feedback, completed_at, game_data";

/// Provides CRUD operations for scores.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert a stamped score, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewScore) -> Result<Score, sqlx::Error> {
        let query = format!(
            "INSERT INTO scores
                (assessment_id, candidate_id, score, feedback, completed_at, game_data)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(input.assessment_id)
            .bind(input.candidate_id)
            .bind(&input.score)
            .bind(&input.feedback)
            .bind(input.completed_at)
            .bind(&input.game_data)
            .fetch_one(pool)
            .await
    }

    /// Find a score by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Score>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scores WHERE score_id = $1");
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the score recorded for an assessment.
    ///
    /// Duplicates are not prevented; when several exist the lowest
    /// `score_id` is returned.
    pub async fn find_by_assessment(
        pool: &PgPool,
        assessment_id: DbId,
    ) -> Result<Option<Score>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scores WHERE assessment_id = $1 ORDER BY score_id LIMIT 1"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(assessment_id)
            .fetch_optional(pool)
            .await
    }

    /// List all scores ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Score>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scores ORDER BY score_id");
        sqlx::query_as::<_, Score>(&query).fetch_all(pool).await
    }

    /// List scores for a candidate.
    pub async fn list_by_candidate(
        pool: &PgPool,
        candidate_id: DbId,
    ) -> Result<Vec<Score>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM scores WHERE candidate_id = $1 ORDER BY score_id");
        sqlx::query_as::<_, Score>(&query)
            .bind(candidate_id)
            .fetch_all(pool)
            .await
    }

    /// Update a score. Only non-`None` fields in `input` are applied.
    /// `completed_at` is never touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScore,
    ) -> Result<Option<Score>, sqlx::Error> {
        let query = format!(
            "UPDATE scores SET
                assessment_id = COALESCE($2, assessment_id),
                candidate_id = COALESCE($3, candidate_id),
                score = COALESCE($4, score),
                feedback = COALESCE($5, feedback),
                game_data = COALESCE($6, game_data)
             WHERE score_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .bind(input.assessment_id)
            .bind(input.candidate_id)
            .bind(&input.score)
            .bind(&input.feedback)
            .bind(&input.game_data)
            .fetch_optional(pool)
            .await
    }

    /// Delete a score by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scores WHERE score_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
