//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillcheck_core::types::DbId;
use skillcheck_db::models::user::{CreateUser, UpdateUser, User};
use skillcheck_db::store::Store;

use crate::error::AppResult;
use crate::services::UserService;
use crate::state::AppState;

/// POST /api/users
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = UserService::new(&state.store).create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users
pub async fn list<S: Store>(State(state): State<AppState<S>>) -> AppResult<Json<Vec<User>>> {
    let users = UserService::new(&state.store).list_all().await?;
    Ok(Json(users))
}

/// GET /api/users/{id}
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserService::new(&state.store).get(id).await?;
    Ok(Json(user))
}

/// GET /api/users/email/{email}
pub async fn get_by_email<S: Store>(
    State(state): State<AppState<S>>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let user = UserService::new(&state.store).get_by_email(&email).await?;
    Ok(Json(user))
}

/// GET /api/users/company/{company_id}
pub async fn list_by_company<S: Store>(
    State(state): State<AppState<S>>,
    Path(company_id): Path<DbId>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserService::new(&state.store)
        .list_by_company(company_id)
        .await?;
    Ok(Json(users))
}

/// PUT /api/users/{id}
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserService::new(&state.store).update(id, input).await?;
    Ok(Json(user))
}

/// DELETE /api/users/{id}
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    UserService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
