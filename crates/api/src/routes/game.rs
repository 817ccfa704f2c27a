//! Route definitions for the `/games` resource.

use axum::routing::get;
use axum::Router;
use skillcheck_db::store::Store;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /active                            -> list_active
/// GET    /type/{game_type}                  -> list_by_type
/// ```
pub fn router<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(game::list::<S>).post(game::create::<S>))
        .route(
            "/{id}",
            get(game::get_by_id::<S>)
                .put(game::update::<S>)
                .delete(game::delete::<S>),
        )
        .route("/active", get(game::list_active::<S>))
        .route("/type/{game_type}", get(game::list_by_type::<S>))
}
