//! Contact-form message model and DTO.

use maya_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// Public contact-form submission.
///
/// Fields are optional at the serde level so a missing field is reported as
/// a validation failure rather than a JSON shape error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateContact {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Validated contact message ready for insertion.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
