//! Route definitions for the `/assessments` resource.

use axum::routing::get;
use axum::Router;
use skillcheck_db::store::Store;

use crate::handlers::assessment;
use crate::state::AppState;

/// Routes mounted at `/assessments`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /candidate/{candidate_id}          -> list_by_candidate
/// GET    /hr/{hr_id}                        -> list_by_hr
/// GET    /status/{status}                   -> list_by_status
/// ```
pub fn router<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(assessment::list::<S>).post(assessment::create::<S>))
        .route(
            "/{id}",
            get(assessment::get_by_id::<S>)
                .put(assessment::update::<S>)
                .delete(assessment::delete::<S>),
        )
        .route(
            "/candidate/{candidate_id}",
            get(assessment::list_by_candidate::<S>),
        )
        .route("/hr/{hr_id}", get(assessment::list_by_hr::<S>))
        .route("/status/{status}", get(assessment::list_by_status::<S>))
}
