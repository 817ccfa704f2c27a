//! Domain rules for the skill-assessment service.
//!
//! Pure types and functions shared by the persistence and HTTP layers:
//! identifier/timestamp aliases, the domain error type, lifecycle enums,
//! pre-save timestamp stamping, lenient timestamp parsing and input
//! validation helpers.

pub mod assessment;
pub mod error;
pub mod stamping;
pub mod timestamp;
pub mod types;
pub mod user;
pub mod validation;
