//! Repository for the `services` table.

use maya_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, title, description, image, "order", created_at, updated_at"#;

/// Outcome of [`ServiceRepo::delete_cascade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeDelete {
    /// Whether the service row existed and was removed.
    pub service_deleted: bool,
    /// Number of projects removed along with it.
    pub projects_deleted: u64,
}

/// Provides CRUD operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    ///
    /// Absent `description`/`image` default to `''`, absent `order` to 0.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO services (title, description, image, "order")
               VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, 0))
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.order)
            .fetch_one(pool)
            .await
    }

    /// Find a service by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all services by `order` ascending; equal orders keep insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM services ORDER BY "order" ASC, id ASC"#);
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Number of services.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(pool)
            .await
    }

    /// Update a service. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            r#"UPDATE services SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                "order" = COALESCE($5, "order")
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service together with every project that references it.
    ///
    /// Projects go first, then the service, inside one transaction: either
    /// both deletes land or neither does.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<CascadeDelete, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let projects = sqlx::query("DELETE FROM projects WHERE service_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let service = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CascadeDelete {
            service_deleted: service.rows_affected() > 0,
            projects_deleted: projects.rows_affected(),
        })
    }
}
