//! Game catalog model and DTOs.

use serde::{Deserialize, Serialize};
use skillcheck_core::types::DbId;
use skillcheck_core::validation::non_blank;
use sqlx::FromRow;
use validator::Validate;

/// A game row from the `games` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub game_name: String,
    pub game_description: String,
    pub skill_name: String,
    /// External location where the game is played.
    pub game_url: String,
    pub game_image: String,
    pub active: bool,
    /// Free-form category, e.g. `CRITICAL_THINKING`.
    pub game_type: String,
}

/// DTO for creating a new game.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    #[validate(custom(function = "non_blank"))]
    pub game_name: String,
    #[validate(custom(function = "non_blank"))]
    pub game_description: String,
    #[validate(custom(function = "non_blank"))]
    pub skill_name: String,
    #[validate(custom(function = "non_blank"))]
    pub game_url: String,
    #[validate(custom(function = "non_blank"))]
    pub game_image: String,
    /// Defaults to `true` if omitted.
    pub active: Option<bool>,
    #[validate(custom(function = "non_blank"))]
    pub game_type: String,
}

/// DTO for updating an existing game. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGame {
    #[validate(custom(function = "non_blank"))]
    pub game_name: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub game_description: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub skill_name: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub game_url: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub game_image: Option<String>,
    pub active: Option<bool>,
    #[validate(custom(function = "non_blank"))]
    pub game_type: Option<String>,
}
