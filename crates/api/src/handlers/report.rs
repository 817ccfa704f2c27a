//! Handlers for the `/reports` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillcheck_core::types::DbId;
use skillcheck_db::models::report::{CreateReport, Report, UpdateReport};
use skillcheck_db::store::Store;

use crate::error::AppResult;
use crate::services::ReportService;
use crate::state::AppState;

/// POST /api/reports
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(input): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Report>)> {
    let report = ReportService::new(&state.store).create(input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/reports
pub async fn list<S: Store>(State(state): State<AppState<S>>) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportService::new(&state.store).list_all().await?;
    Ok(Json(reports))
}

/// GET /api/reports/{id}
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Report>> {
    let report = ReportService::new(&state.store).get(id).await?;
    Ok(Json(report))
}

/// GET /api/reports/user/{user_id}
pub async fn list_by_user<S: Store>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportService::new(&state.store).list_by_user(user_id).await?;
    Ok(Json(reports))
}

/// PUT /api/reports/{id}
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReport>,
) -> AppResult<Json<Report>> {
    let report = ReportService::new(&state.store).update(id, input).await?;
    Ok(Json(report))
}

/// DELETE /api/reports/{id}
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ReportService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
