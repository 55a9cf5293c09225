//! Repository for the `projects` table.

use maya_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, Project, ProjectServiceRow, ProjectWithService, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, service_id, title, description, media_type, media_url, "order", created_at, updated_at"#;

/// Same columns, qualified for the join with `services`.
const JOINED_COLUMNS: &str = r#"p.id, p.service_id, p.title, p.description, p.media_type,
    p.media_url, p."order", p.created_at, p.updated_at, s.title AS service_title"#;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Fails with a foreign-key violation if `service_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO projects (service_id, title, description, media_type, media_url, "order")
               VALUES ($1, $2, COALESCE($3, ''), $4, $5, COALESCE($6, 0))
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.service_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.media_type.as_str())
            .bind(&input.media_url)
            .bind(input.order)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the projects of one service by `order` ascending.
    pub async fn list_by_service(
        pool: &PgPool,
        service_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM projects
               WHERE service_id = $1
               ORDER BY "order" ASC, id ASC"#
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(service_id)
            .fetch_all(pool)
            .await
    }

    /// List every project with its parent service's id and title.
    pub async fn list_with_service(pool: &PgPool) -> Result<Vec<ProjectWithService>, sqlx::Error> {
        let query = format!(
            r#"SELECT {JOINED_COLUMNS}
               FROM projects p
               LEFT JOIN services s ON s.id = p.service_id
               ORDER BY p."order" ASC, p.id ASC"#
        );
        let rows = sqlx::query_as::<_, ProjectServiceRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProjectWithService::from).collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            r#"UPDATE projects SET
                service_id = COALESCE($2, service_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                media_type = COALESCE($5, media_type),
                media_url = COALESCE($6, media_url),
                "order" = COALESCE($7, "order")
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.service_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.media_type.map(|m| m.as_str()))
            .bind(&input.media_url)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
