//! Hero banner (singleton) model and DTO.

use maya_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// The single row of the `hero` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hero {
    pub id: DbId,
    pub logo_url: String,
    pub title: String,
    pub subtitle: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert payload; same merge rules as [`crate::models::about::UpsertAbout`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpsertHero {
    pub logo_url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}
