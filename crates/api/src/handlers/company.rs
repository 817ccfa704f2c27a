//! Handlers for the `/companies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillcheck_core::types::DbId;
use skillcheck_db::models::company::{
    Company, CompanyWithRecruiters, CreateCompany, UpdateCompany,
};
use skillcheck_db::models::user::User;
use skillcheck_db::store::Store;

use crate::error::AppResult;
use crate::services::CompanyService;
use crate::state::AppState;

/// POST /api/companies
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = CompanyService::new(&state.store).create(input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/companies
pub async fn list<S: Store>(State(state): State<AppState<S>>) -> AppResult<Json<Vec<Company>>> {
    let companies = CompanyService::new(&state.store).list_all().await?;
    Ok(Json(companies))
}

/// GET /api/companies/{id}
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CompanyWithRecruiters>> {
    let company = CompanyService::new(&state.store).get(id).await?;
    Ok(Json(company))
}

/// GET /api/companies/number/{company_number}
pub async fn get_by_number<S: Store>(
    State(state): State<AppState<S>>,
    Path(company_number): Path<String>,
) -> AppResult<Json<CompanyWithRecruiters>> {
    let company = CompanyService::new(&state.store)
        .get_by_number(&company_number)
        .await?;
    Ok(Json(company))
}

/// GET /api/companies/{id}/recruiters
pub async fn list_recruiters<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<User>>> {
    let recruiters = CompanyService::new(&state.store).list_recruiters(id).await?;
    Ok(Json(recruiters))
}

/// PUT /api/companies/{id}
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    let company = CompanyService::new(&state.store).update(id, input).await?;
    Ok(Json(company))
}

/// DELETE /api/companies/{id}
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    CompanyService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
