//! Repository for the singleton `about` table.

use sqlx::PgPool;

use crate::models::about::{About, UpsertAbout};
use crate::repositories::lock_keys;

const COLUMNS: &str = "id, description1, description2, projects_completed, happy_clients, \
                       years_experience, created_at, updated_at";

pub struct AboutRepo;

impl AboutRepo {
    /// The stored about section, if any.
    pub async fn find(pool: &PgPool) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about ORDER BY id LIMIT 1");
        sqlx::query_as::<_, About>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the existing row, or insert one if the table is empty.
    ///
    /// The read and the write run in one transaction holding an advisory
    /// lock, so concurrent upserts cannot both insert.
    pub async fn upsert(pool: &PgPool, input: &UpsertAbout) -> Result<About, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(lock_keys::ABOUT_UPSERT)
            .execute(&mut *tx)
            .await?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM about ORDER BY id LIMIT 1")
            .fetch_optional(&mut *tx)
            .await?;

        let about = match existing {
            Some(id) => {
                let query = format!(
                    "UPDATE about SET
                        description1 = COALESCE($2, description1),
                        description2 = COALESCE($3, description2),
                        projects_completed = COALESCE($4, projects_completed),
                        happy_clients = COALESCE($5, happy_clients),
                        years_experience = COALESCE($6, years_experience)
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, About>(&query)
                    .bind(id)
                    .bind(&input.description1)
                    .bind(&input.description2)
                    .bind(input.projects_completed)
                    .bind(input.happy_clients)
                    .bind(input.years_experience)
                    .fetch_one(&mut *tx)
                    .await?
            }
            None => {
                let query = format!(
                    "INSERT INTO about
                        (description1, description2, projects_completed, happy_clients, years_experience)
                     VALUES (COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, 0),
                             COALESCE($4, 0), COALESCE($5, 0))
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, About>(&query)
                    .bind(&input.description1)
                    .bind(&input.description2)
                    .bind(input.projects_completed)
                    .bind(input.happy_clients)
                    .bind(input.years_experience)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(about)
    }
}
