pub mod assessment;
pub mod company;
pub mod game;
pub mod health;
pub mod report;
pub mod review;
pub mod score;
pub mod user;

use axum::Router;
use skillcheck_db::store::Store;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /companies                                       list, create
/// /companies/{id}                                  get (with recruiters), update, delete
/// /companies/{id}/recruiters                       recruiters of a company
/// /companies/number/{company_number}               get by number (with recruiters)
///
/// /users                                           list, create
/// /users/{id}                                      get, update, delete
/// /users/email/{email}                             get by email
/// /users/company/{company_id}                      users attached to a company
///
/// /games                                           list, create
/// /games/{id}                                      get, update, delete
/// /games/active                                    active games
/// /games/type/{game_type}                          games of a type
///
/// /assessments                                     list, create
/// /assessments/{id}                                get, update, delete
/// /assessments/candidate/{candidate_id}            by candidate
/// /assessments/hr/{hr_id}                          by recruiter
/// /assessments/status/{status}                     by status
///
/// /scores                                          list, create
/// /scores/{id}                                     get, update, delete
/// /scores/assessment/{assessment_id}               score of an assessment
/// /scores/candidate/{candidate_id}                 by candidate
///
/// /reports                                         list, create
/// /reports/{id}                                    get, update, delete
/// /reports/user/{user_id}                          by user
///
/// /reviews                                         list, create
/// /reviews/{id}                                    get, update, delete
/// /reviews/user/{user_id}                          by user
/// ```
pub fn api_routes<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .nest("/companies", company::router::<S>())
        .nest("/users", user::router::<S>())
        .nest("/games", game::router::<S>())
        .nest("/assessments", assessment::router::<S>())
        .nest("/scores", score::router::<S>())
        .nest("/reports", report::router::<S>())
        .nest("/reviews", review::router::<S>())
}
