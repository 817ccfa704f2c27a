//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;
use skillcheck_db::store::Store;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /email/{email}                     -> get_by_email
/// GET    /company/{company_id}              -> list_by_company
/// ```
pub fn router<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(user::list::<S>).post(user::create::<S>))
        .route(
            "/{id}",
            get(user::get_by_id::<S>)
                .put(user::update::<S>)
                .delete(user::delete::<S>),
        )
        .route("/email/{email}", get(user::get_by_email::<S>))
        .route("/company/{company_id}", get(user::list_by_company::<S>))
}
