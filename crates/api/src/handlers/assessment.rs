//! Handlers for the `/assessments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillcheck_core::types::DbId;
use skillcheck_db::models::assessment::{Assessment, CreateAssessment, UpdateAssessment};
use skillcheck_db::store::Store;

use crate::error::AppResult;
use crate::services::AssessmentService;
use crate::state::AppState;

/// POST /api/assessments
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(input): Json<CreateAssessment>,
) -> AppResult<(StatusCode, Json<Assessment>)> {
    let assessment = AssessmentService::new(&state.store).create(input).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/assessments
pub async fn list<S: Store>(State(state): State<AppState<S>>) -> AppResult<Json<Vec<Assessment>>> {
    let assessments = AssessmentService::new(&state.store).list_all().await?;
    Ok(Json(assessments))
}

/// GET /api/assessments/{id}
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assessment>> {
    let assessment = AssessmentService::new(&state.store).get(id).await?;
    Ok(Json(assessment))
}

/// GET /api/assessments/candidate/{candidate_id}
pub async fn list_by_candidate<S: Store>(
    State(state): State<AppState<S>>,
    Path(candidate_id): Path<DbId>,
) -> AppResult<Json<Vec<Assessment>>> {
    let assessments = AssessmentService::new(&state.store)
        .list_by_candidate(candidate_id)
        .await?;
    Ok(Json(assessments))
}

/// GET /api/assessments/hr/{hr_id}
pub async fn list_by_hr<S: Store>(
    State(state): State<AppState<S>>,
    Path(hr_id): Path<DbId>,
) -> AppResult<Json<Vec<Assessment>>> {
    let assessments = AssessmentService::new(&state.store).list_by_hr(hr_id).await?;
    Ok(Json(assessments))
}

/// GET /api/assessments/status/{status}
pub async fn list_by_status<S: Store>(
    State(state): State<AppState<S>>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Assessment>>> {
    let assessments = AssessmentService::new(&state.store)
        .list_by_status(&status)
        .await?;
    Ok(Json(assessments))
}

/// PUT /api/assessments/{id}
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssessment>,
) -> AppResult<Json<Assessment>> {
    let assessment = AssessmentService::new(&state.store).update(id, input).await?;
    Ok(Json(assessment))
}

/// DELETE /api/assessments/{id}
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    AssessmentService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
