//! Repository for the `contacts` table.

use maya_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{ContactMessage, NewContactMessage};

const COLUMNS: &str = "id, name, email, subject, message, created_at";

/// Append-only inbox for the public contact form.
pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Newest messages first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a message by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
