//! Handlers for portfolio projects.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use maya_core::types::DbId;
use maya_db::models::project::{CreateProject, Project, ProjectWithService, UpdateProject};
use maya_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/admin/projects
///
/// Every project with its parent service's id and title.
pub async fn list(
    _admin: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectWithService>>> {
    let projects = ProjectRepo::list_with_service(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/admin/projects/{id}
pub async fn get_by_id(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// POST /api/admin/projects
pub async fn create(
    admin: AuthAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        admin_id = admin.admin_id,
        project_id = project.id,
        service_id = project.service_id,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/projects/{id}
pub async fn update(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(admin_id = admin.admin_id, project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Project", id));
    }
    tracing::info!(admin_id = admin.admin_id, project_id = id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
