//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use maya_core::error::CoreError;
use maya_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Every `/api/admin/*` handler (except login and init) and the upload
/// handler take this as a parameter:
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.admin_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// A missing or malformed header is rejected with 401 `"Access denied"`; a
/// token that fails signature or expiry checks with 403 `"Invalid token"`.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The admin's internal database id (from `claims.id`).
    pub admin_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Access denied".into())))?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::Core(CoreError::Forbidden("Invalid token".into()))
        })?;

        Ok(AuthAdmin {
            admin_id: claims.id,
            username: claims.username,
        })
    }
}
