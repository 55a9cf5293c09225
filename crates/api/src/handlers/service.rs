//! Handlers for the services catalogue.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use maya_core::types::DbId;
use maya_db::models::project::Project;
use maya_db::models::service::{CreateService, Service, UpdateService};
use maya_db::repositories::{ProjectRepo, ServiceRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/services
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(services))
}

/// GET /api/services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Service", id))?;
    Ok(Json(service))
}

/// GET /api/services/{id}/projects
///
/// An unknown service simply has no projects.
pub async fn list_projects(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_service(&state.pool, id).await?;
    Ok(Json(projects))
}

/// POST /api/admin/services
pub async fn create(
    admin: AuthAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let service = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.admin_id, service_id = service.id, "Service created");
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/admin/services/{id}
pub async fn update(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateService>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Service", id))?;
    tracing::info!(admin_id = admin.admin_id, service_id = id, "Service updated");
    Ok(Json(service))
}

/// DELETE /api/admin/services/{id}
///
/// Removes the service together with every project that belongs to it.
pub async fn delete(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = ServiceRepo::delete_cascade(&state.pool, id).await?;
    if !outcome.service_deleted {
        return Err(AppError::not_found("Service", id));
    }
    tracing::info!(
        admin_id = admin.admin_id,
        service_id = id,
        projects_deleted = outcome.projects_deleted,
        "Service deleted"
    );
    Ok(Json(MessageResponse::new("Service deleted successfully")))
}
