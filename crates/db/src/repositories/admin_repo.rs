//! Repository for the `admins` table.

use maya_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin::{Admin, CreateAdmin};
use crate::repositories::lock_keys;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, created_at, updated_at";

/// Provides the credential-store operations.
pub struct AdminRepo;

impl AdminRepo {
    /// Number of admin accounts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(pool)
            .await
    }

    /// Insert an admin, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Insert `input` only if the table is empty.
    ///
    /// Concurrent callers are serialised on an advisory lock, so at most one
    /// of them creates the first admin. Returns `None` when an admin already
    /// existed.
    pub async fn create_first(
        pool: &PgPool,
        input: &CreateAdmin,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(lock_keys::ADMIN_BOOTSTRAP)
            .execute(&mut *tx)
            .await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO admins (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let admin = sqlx::query_as::<_, Admin>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(admin))
    }

    /// Find an admin by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE id = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an admin by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE username = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Replace an admin's password hash. Returns `true` if a row was updated.
    pub async fn update_password_hash(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE admins SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
