//! Handlers for the About section.

use axum::extract::State;
use axum::Json;
use maya_core::content::{AboutDefaults, DEFAULT_ABOUT};
use maya_db::models::about::{About, UpsertAbout};
use maya_db::repositories::AboutRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// The stored row, or the built-in copy while nothing has been saved.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AboutView {
    Stored(About),
    Default(AboutDefaults),
}

/// GET /api/about
pub async fn get(State(state): State<AppState>) -> AppResult<Json<AboutView>> {
    let view = match AboutRepo::find(&state.pool).await? {
        Some(about) => AboutView::Stored(about),
        None => AboutView::Default(DEFAULT_ABOUT),
    };
    Ok(Json(view))
}

/// PUT /api/admin/about
pub async fn upsert(
    admin: AuthAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpsertAbout>,
) -> AppResult<Json<About>> {
    let about = AboutRepo::upsert(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.admin_id, about_id = about.id, "About section saved");
    Ok(Json(about))
}
