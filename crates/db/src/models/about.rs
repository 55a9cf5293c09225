//! About section (singleton) model and DTO.

use maya_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::lenient;

/// The single row of the `about` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct About {
    pub id: DbId,
    pub description1: String,
    pub description2: String,
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub years_experience: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert payload. Provided fields overwrite, absent fields are kept (or
/// take column defaults when the row is first created).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpsertAbout {
    pub description1: Option<String>,
    pub description2: Option<String>,
    #[validate(range(min = 0))]
    #[serde(default, deserialize_with = "lenient::i32_optional")]
    pub projects_completed: Option<i32>,
    #[validate(range(min = 0))]
    #[serde(default, deserialize_with = "lenient::i32_optional")]
    pub happy_clients: Option<i32>,
    #[validate(range(min = 0))]
    #[serde(default, deserialize_with = "lenient::i32_optional")]
    pub years_experience: Option<i32>,
}
