//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;
use skillcheck_db::store::Store;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /user/{user_id}                    -> list_by_user
/// ```
pub fn router<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(report::list::<S>).post(report::create::<S>))
        .route(
            "/{id}",
            get(report::get_by_id::<S>)
                .put(report::update::<S>)
                .delete(report::delete::<S>),
        )
        .route("/user/{user_id}", get(report::list_by_user::<S>))
}
