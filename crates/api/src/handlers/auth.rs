//! Handlers for admin authentication (login, bootstrap, password change).

use axum::extract::State;
use axum::Json;
use maya_core::error::CoreError;
use maya_db::models::admin::CreateAdmin;
use maya_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_against_dummy, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Single message for every login failure, so callers cannot tell an unknown
/// username from a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Response for `POST /admin/init`.
#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub message: &'static str,
    pub username: String,
}

/// Request body for `PUT /admin/change-password`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let Some(admin) = AdminRepo::find_by_username(&state.pool, &input.username).await? else {
        // Same bcrypt work as a wrong password, so timing does not reveal
        // whether the username exists.
        verify_against_dummy(&input.password);
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %admin.username, "Rejected login");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = generate_token(admin.id, &admin.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        username: admin.username,
    }))
}

/// POST /api/admin/init
///
/// Creates the bootstrap admin from configuration. Only allowed while no
/// admin exists.
pub async fn init(State(state): State<AppState>) -> AppResult<Json<InitResponse>> {
    if AdminRepo::count(&state.pool).await? > 0 {
        return Err(already_initialized());
    }

    let bootstrap = &state.config.bootstrap_admin;
    let password_hash = hash_password(&bootstrap.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // The count above is only a fast path; `create_first` re-checks under a lock.
    let admin = AdminRepo::create_first(
        &state.pool,
        &CreateAdmin {
            username: bootstrap.username.clone(),
            password_hash,
        },
    )
    .await?
    .ok_or_else(already_initialized)?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Bootstrap admin created");
    Ok(Json(InitResponse {
        message: "Admin created successfully",
        username: admin.username,
    }))
}

/// PUT /api/admin/change-password
pub async fn change_password(
    admin: AuthAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    // The token may outlive the account it was issued for.
    let account = AdminRepo::find_by_id(&state.pool, admin.admin_id)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let current_valid = verify_password(&input.current_password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::unauthorized("Current password is incorrect"));
    }

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    if !AdminRepo::update_password_hash(&state.pool, account.id, &new_hash).await? {
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    tracing::info!(admin_id = account.id, "Admin password changed");
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

fn already_initialized() -> AppError {
    AppError::Core(CoreError::Validation("Admin already exists".into()))
}
