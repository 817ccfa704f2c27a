//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase to match the public wire format.

pub mod assessment;
pub mod company;
pub mod game;
pub mod report;
pub mod review;
pub mod score;
pub mod user;
