//! Project (portfolio item) model and DTOs.

use maya_core::media::MediaType;
use maya_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::lenient;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub service_id: DbId,
    pub title: String,
    pub description: String,
    /// `"image"` or `"video"`; see [`MediaType`].
    pub media_type: String,
    pub media_url: String,
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Parent service reference embedded in the admin project listing.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRef {
    pub id: DbId,
    pub title: String,
}

/// A project joined with its parent service, as listed on the dashboard.
///
/// The parent is exposed under `services` to match the shape the dashboard
/// already reads.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithService {
    #[serde(flatten)]
    pub project: Project,
    pub services: Option<ServiceRef>,
}

/// Flat row produced by the project/service join.
#[derive(Debug, FromRow)]
pub struct ProjectServiceRow {
    #[sqlx(flatten)]
    pub project: Project,
    pub service_title: Option<String>,
}

impl From<ProjectServiceRow> for ProjectWithService {
    fn from(row: ProjectServiceRow) -> Self {
        let services = row.service_title.map(|title| ServiceRef {
            id: row.project.service_id,
            title,
        });
        Self {
            project: row.project,
            services,
        }
    }
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[serde(deserialize_with = "lenient::i64_required")]
    pub service_id: DbId,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub media_type: MediaType,
    #[validate(length(min = 1, message = "media_url is required"))]
    pub media_url: String,
    #[serde(default, deserialize_with = "lenient::i32_optional")]
    pub order: Option<i32>,
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "lenient::i64_optional")]
    pub service_id: Option<DbId>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<MediaType>,
    #[validate(length(min = 1, message = "media_url must not be empty"))]
    pub media_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::i32_optional")]
    pub order: Option<i32>,
}
