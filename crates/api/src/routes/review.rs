//! Route definitions for the `/reviews` resource.

use axum::routing::get;
use axum::Router;
use skillcheck_db::store::Store;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
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
        .route("/", get(review::list::<S>).post(review::create::<S>))
        .route(
            "/{id}",
            get(review::get_by_id::<S>)
                .put(review::update::<S>)
                .delete(review::delete::<S>),
        )
        .route("/user/{user_id}", get(review::list_by_user::<S>))
}
