//! Route definitions for the `/companies` resource.

use axum::routing::get;
use axum::Router;
use skillcheck_db::store::Store;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /{id}/recruiters                   -> list_recruiters
/// GET    /number/{company_number}           -> get_by_number
/// ```
pub fn router<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(company::list::<S>).post(company::create::<S>))
        .route(
            "/{id}",
            get(company::get_by_id::<S>)
                .put(company::update::<S>)
                .delete(company::delete::<S>),
        )
        .route("/{id}/recruiters", get(company::list_recruiters::<S>))
        .route("/number/{company_number}", get(company::get_by_number::<S>))
}
