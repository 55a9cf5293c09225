//! Handler for the admin media upload gateway.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use maya_core::error::CoreError;
use maya_core::media::{self, MediaType, MAX_UPLOAD_BYTES};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Content type assumed when the client sends none; never accepted.
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Response for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// The `file` part of an upload form.
struct UploadedFile {
    filename: String,
    content_type: String,
    data: Bytes,
}

/// POST /api/upload
///
/// Accepts a multipart form with a required `file` field and an optional
/// `media_type` field (`image` or `video`) restricting what may be sent.
/// The file is written to the media bucket under a timestamped key and its
/// public URL is returned.
pub async fn upload(
    admin: AuthAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<UploadedFile> = None;
    let mut expected: Option<MediaType> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(UNKNOWN_CONTENT_TYPE)
                    .to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            "media_type" => {
                let text = field.text().await.map_err(multipart_error)?;
                let text = text.trim();
                if !text.is_empty() {
                    expected = Some(MediaType::from_name(text)?);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    let kind = media::validate_upload(
        &file.filename,
        &file.content_type,
        file.data.len() as u64,
        expected,
    )?;

    let key = media::storage_key(chrono::Utc::now().timestamp_millis(), &file.filename);
    let size = file.data.len();

    state
        .storage
        .put(&key, file.data, &file.content_type)
        .await
        .map_err(|e| AppError::Core(CoreError::UploadFailed(e.to_string())))?;

    let url = state.storage.public_url(&key);
    tracing::info!(
        admin_id = admin.admin_id,
        key = %key,
        media_type = kind.as_str(),
        size,
        "Media uploaded"
    );
    Ok(Json(UploadResponse { url }))
}

/// Body-limit breaches surface as multipart errors; keep them as 413.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Core(CoreError::PayloadTooLarge {
            limit_bytes: MAX_UPLOAD_BYTES,
        })
    } else {
        AppError::BadRequest(err.body_text())
    }
}
