//! Handlers for the `/scores` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillcheck_core::types::DbId;
use skillcheck_db::models::score::{CreateScore, Score, UpdateScore};
use skillcheck_db::store::Store;

use crate::error::AppResult;
use crate::services::ScoreService;
use crate::state::AppState;

/// POST /api/scores
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(input): Json<CreateScore>,
) -> AppResult<(StatusCode, Json<Score>)> {
    let score = ScoreService::new(&state.store).create(input).await?;
    Ok((StatusCode::CREATED, Json(score)))
}

/// GET /api/scores
pub async fn list<S: Store>(State(state): State<AppState<S>>) -> AppResult<Json<Vec<Score>>> {
    let scores = ScoreService::new(&state.store).list_all().await?;
    Ok(Json(scores))
}

/// GET /api/scores/{id}
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Score>> {
    let score = ScoreService::new(&state.store).get(id).await?;
    Ok(Json(score))
}

/// GET /api/scores/assessment/{assessment_id}
pub async fn get_by_assessment<S: Store>(
    State(state): State<AppState<S>>,
    Path(assessment_id): Path<DbId>,
) -> AppResult<Json<Score>> {
    let score = ScoreService::new(&state.store)
        .get_by_assessment(assessment_id)
        .await?;
    Ok(Json(score))
}

/// GET /api/scores/candidate/{candidate_id}
pub async fn list_by_candidate<S: Store>(
    State(state): State<AppState<S>>,
    Path(candidate_id): Path<DbId>,
) -> AppResult<Json<Vec<Score>>> {
    let scores = ScoreService::new(&state.store)
        .list_by_candidate(candidate_id)
        .await?;
    Ok(Json(scores))
}

/// PUT /api/scores/{id}
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScore>,
) -> AppResult<Json<Score>> {
    let score = ScoreService::new(&state.store).update(id, input).await?;
    Ok(Json(score))
}

/// DELETE /api/scores/{id}
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ScoreService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
