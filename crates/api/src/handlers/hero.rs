//! Handlers for the Hero banner.

use axum::extract::State;
use axum::Json;
use maya_core::content::{HeroDefaults, DEFAULT_HERO};
use maya_db::models::hero::{Hero, UpsertHero};
use maya_db::repositories::HeroRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HeroView {
    Stored(Hero),
    Default(HeroDefaults),
}

/// GET /api/hero
pub async fn get(State(state): State<AppState>) -> AppResult<Json<HeroView>> {
    let view = match HeroRepo::find(&state.pool).await? {
        Some(hero) => HeroView::Stored(hero),
        None => HeroView::Default(DEFAULT_HERO),
    };
    Ok(Json(view))
}

/// PUT /api/admin/hero
pub async fn upsert(
    admin: AuthAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpsertHero>,
) -> AppResult<Json<Hero>> {
    let hero = HeroRepo::upsert(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.admin_id, hero_id = hero.id, "Hero banner saved");
    Ok(Json(hero))
}
