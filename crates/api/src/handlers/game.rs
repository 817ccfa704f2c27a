//! Handlers for the `/games` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillcheck_core::types::DbId;
use skillcheck_db::models::game::{CreateGame, Game, UpdateGame};
use skillcheck_db::store::Store;

use crate::error::AppResult;
use crate::services::GameService;
use crate::state::AppState;

/// POST /api/games
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(input): Json<CreateGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    let game = GameService::new(&state.store).create(input).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/games
pub async fn list<S: Store>(State(state): State<AppState<S>>) -> AppResult<Json<Vec<Game>>> {
    let games = GameService::new(&state.store).list_all().await?;
    Ok(Json(games))
}

/// GET /api/games/{id}
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Game>> {
    let game = GameService::new(&state.store).get(id).await?;
    Ok(Json(game))
}

/// GET /api/games/active
pub async fn list_active<S: Store>(
    State(state): State<AppState<S>>,
) -> AppResult<Json<Vec<Game>>> {
    let games = GameService::new(&state.store).list_active().await?;
    Ok(Json(games))
}

/// GET /api/games/type/{game_type}
pub async fn list_by_type<S: Store>(
    State(state): State<AppState<S>>,
    Path(game_type): Path<String>,
) -> AppResult<Json<Vec<Game>>> {
    let games = GameService::new(&state.store).list_by_type(&game_type).await?;
    Ok(Json(games))
}

/// PUT /api/games/{id}
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGame>,
) -> AppResult<Json<Game>> {
    let game = GameService::new(&state.store).update(id, input).await?;
    Ok(Json(game))
}

/// DELETE /api/games/{id}
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    GameService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
