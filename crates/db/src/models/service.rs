//! Service entity model and DTOs.

use maya_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::lenient;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Display position; lists sort ascending on this.
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateService {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Defaults to 0 if omitted.
    #[serde(default, deserialize_with = "lenient::i32_optional")]
    pub order: Option<i32>,
}

/// DTO for updating a service. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateService {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::i32_optional")]
    pub order: Option<i32>,
}
