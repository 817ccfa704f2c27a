//! Axum handlers, one module per resource.
//!
//! Handlers are thin: extract, build the service over `state.store`, call
//! it and pick the status code. All rules live in [`crate::services`].

pub mod assessment;
pub mod company;
pub mod game;
pub mod report;
pub mod review;
pub mod score;
pub mod user;
