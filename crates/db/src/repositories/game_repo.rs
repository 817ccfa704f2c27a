//! Repository for the `games` table.

use skillcheck_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGame, Game, UpdateGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, game_name, game_description, skill_name, game_url, game_image, active, game_type";

/// Provides CRUD operations for the game catalog.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    ///
    /// If `active` is `None` in the input, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games
                (game_name, game_description, skill_name, game_url, game_image, active, game_type)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.game_name)
            .bind(&input.game_description)
            .bind(&input.skill_name)
            .bind(&input.game_url)
            .bind(&input.game_image)
            .bind(input.active)
            .bind(&input.game_type)
            .fetch_one(pool)
            .await
    }

    /// Find a game by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all games ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY id");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// List games by their `active` flag.
    pub async fn list_by_active(pool: &PgPool, active: bool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE active = $1 ORDER BY id");
        sqlx::query_as::<_, Game>(&query)
            .bind(active)
            .fetch_all(pool)
            .await
    }

    /// List games of one type (exact match).
    pub async fn list_by_type(pool: &PgPool, game_type: &str) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE game_type = $1 ORDER BY id");
        sqlx::query_as::<_, Game>(&query)
            .bind(game_type)
            .fetch_all(pool)
            .await
    }

    /// Update a game. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET
                game_name = COALESCE($2, game_name),
                game_description = COALESCE($3, game_description),
                skill_name = COALESCE($4, skill_name),
                game_url = COALESCE($5, game_url),
                game_image = COALESCE($6, game_image),
                active = COALESCE($7, active),
                game_type = COALESCE($8, game_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.game_name)
            .bind(&input.game_description)
            .bind(&input.skill_name)
            .bind(&input.game_url)
            .bind(&input.game_image)
            .bind(input.active)
            .bind(&input.game_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a game by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
