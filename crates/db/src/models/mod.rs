//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for merges
//!
//! DTOs ignore unknown fields so the dashboard can post a whole row back.

pub mod about;
pub mod admin;
pub mod contact;
pub mod hero;
pub mod lenient;
pub mod project;
pub mod service;
