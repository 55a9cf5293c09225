//! Repository for the singleton `hero` table.

use sqlx::PgPool;

use crate::models::hero::{Hero, UpsertHero};
use crate::repositories::lock_keys;

const COLUMNS: &str = "id, logo_url, title, subtitle, created_at, updated_at";

pub struct HeroRepo;

impl HeroRepo {
    /// The stored hero banner, if any.
    pub async fn find(pool: &PgPool) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Hero>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the existing row, or insert one if the table is empty.
    ///
    /// Serialised the same way as [`crate::repositories::AboutRepo::upsert`].
    pub async fn upsert(pool: &PgPool, input: &UpsertHero) -> Result<Hero, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(lock_keys::HERO_UPSERT)
            .execute(&mut *tx)
            .await?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM hero ORDER BY id LIMIT 1")
            .fetch_optional(&mut *tx)
            .await?;

        let hero = match existing {
            Some(id) => {
                let query = format!(
                    "UPDATE hero SET
                        logo_url = COALESCE($2, logo_url),
                        title = COALESCE($3, title),
                        subtitle = COALESCE($4, subtitle)
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Hero>(&query)
                    .bind(id)
                    .bind(&input.logo_url)
                    .bind(&input.title)
                    .bind(&input.subtitle)
                    .fetch_one(&mut *tx)
                    .await?
            }
            None => {
                let query = format!(
                    "INSERT INTO hero (logo_url, title, subtitle)
                     VALUES (COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''))
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Hero>(&query)
                    .bind(&input.logo_url)
                    .bind(&input.title)
                    .bind(&input.subtitle)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(hero)
    }
}
