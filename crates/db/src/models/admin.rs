//! Admin account model.

use maya_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for inserting an admin. The hash is computed by the caller.
#[derive(Debug)]
pub struct CreateAdmin {
    pub username: String,
    pub password_hash: String,
}
