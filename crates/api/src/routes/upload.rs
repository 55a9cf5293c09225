use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use maya_core::media::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Room for multipart boundaries and the small text fields around the file.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// ```text
/// POST /upload  -> upload::upload (body limit raised to fit a full-size file)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload::upload).layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES as usize + MULTIPART_OVERHEAD_BYTES,
        )),
    )
}
