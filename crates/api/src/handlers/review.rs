//! Handlers for the `/reviews` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillcheck_core::types::DbId;
use skillcheck_db::models::review::{CreateReview, Review, UpdateReview};
use skillcheck_db::store::Store;

use crate::error::AppResult;
use crate::services::ReviewService;
use crate::state::AppState;

/// POST /api/reviews
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = ReviewService::new(&state.store).create(input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews
pub async fn list<S: Store>(State(state): State<AppState<S>>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewService::new(&state.store).list_all().await?;
    Ok(Json(reviews))
}

/// GET /api/reviews/{id}
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Review>> {
    let review = ReviewService::new(&state.store).get(id).await?;
    Ok(Json(review))
}

/// GET /api/reviews/user/{user_id}
pub async fn list_by_user<S: Store>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewService::new(&state.store).list_by_user(user_id).await?;
    Ok(Json(reviews))
}

/// PUT /api/reviews/{id}
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<Review>> {
    let review = ReviewService::new(&state.store).update(id, input).await?;
    Ok(Json(review))
}

/// DELETE /api/reviews/{id}
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ReviewService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
