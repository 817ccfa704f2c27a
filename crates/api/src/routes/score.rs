//! Route definitions for the `/scores` resource.

use axum::routing::get;
use axum::Router;
use skillcheck_db::store::Store;

use crate::handlers::score;
use crate::state::AppState;

/// Routes mounted at `/scores`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /assessment/{assessment_id}        -> get_by_assessment
/// GET    /candidate/{candidate_id}          -> list_by_candidate
/// ```
pub fn router<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(score::list::<S>).post(score::create::<S>))
        .route(
            "/{id}",
            get(score::get_by_id::<S>)
                .put(score::update::<S>)
                .delete(score::delete::<S>),
        )
        .route(
            "/assessment/{assessment_id}",
            get(score::get_by_assessment::<S>),
        )
        .route("/candidate/{candidate_id}", get(score::list_by_candidate::<S>))
}
