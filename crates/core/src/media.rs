//! Upload rules for the media bucket.
//!
//! An upload is accepted only when both the file extension and the declared
//! MIME type name one of the supported image or video formats, and the body
//! fits under [`MAX_UPLOAD_BYTES`]. Object keys are timestamp-prefixed so two
//! uploads of the same file never collide.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largest accepted upload body (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Image formats, by extension / MIME subtype.
const IMAGE_FORMATS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// Video formats, by extension / MIME subtype.
const VIDEO_FORMATS: &[&str] = &["mp4", "mov", "avi"];

/// MIME subtypes that browsers send for formats whose extension differs.
const VIDEO_SUBTYPE_ALIASES: &[(&str, &str)] = &[("quicktime", "mov"), ("x-msvideo", "avi")];

/// Which media element a project renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Database / JSON representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Parse from the database `media_type` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(CoreError::Validation(format!(
                "Unknown media type '{other}'. Must be one of: image, video"
            ))),
        }
    }
}

fn classify_format(format: &str) -> Option<MediaType> {
    if IMAGE_FORMATS.contains(&format) {
        Some(MediaType::Image)
    } else if VIDEO_FORMATS.contains(&format) {
        Some(MediaType::Video)
    } else {
        None
    }
}

/// Classify a filename by its (case-insensitive) extension.
pub fn classify_extension(filename: &str) -> Option<MediaType> {
    let (_, ext) = filename.rsplit_once('.')?;
    classify_format(&ext.to_ascii_lowercase())
}

/// Classify a MIME type such as `image/png` or `video/quicktime`.
///
/// Parameters after `;` are ignored. The top-level type must agree with the
/// format, so `image/mp4` is rejected.
pub fn classify_content_type(content_type: &str) -> Option<MediaType> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let (top, subtype) = essence.split_once('/')?;

    let format = VIDEO_SUBTYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == subtype)
        .map_or(subtype, |(_, format)| format);

    let kind = classify_format(format)?;
    match (top, kind) {
        ("image", MediaType::Image) | ("video", MediaType::Video) => Some(kind),
        _ => None,
    }
}

/// Check an upload against the size limit and the allowed formats.
///
/// When `expected` is set (the dashboard knows whether it is filling an image
/// or a video slot) the file must also be of that kind. Returns the detected
/// media type.
pub fn validate_upload(
    filename: &str,
    content_type: &str,
    size_bytes: u64,
    expected: Option<MediaType>,
) -> Result<MediaType, CoreError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::PayloadTooLarge {
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    let by_extension = classify_extension(filename);
    let by_mime = classify_content_type(content_type);

    let kind = match (by_extension, by_mime) {
        (Some(ext), Some(mime)) if ext == mime => ext,
        _ => {
            return Err(CoreError::UnsupportedMediaType(
                "Only images and videos are allowed".into(),
            ))
        }
    };

    if let Some(expected) = expected {
        if expected != kind {
            return Err(CoreError::UnsupportedMediaType(format!(
                "Expected {} media but received {} media",
                expected.as_str(),
                kind.as_str()
            )));
        }
    }

    Ok(kind)
}

/// Build the bucket key for an upload: `{millis}-{basename}`.
///
/// Any directory components a client put in the filename are dropped.
pub fn storage_key(timestamp_millis: i64, filename: &str) -> String {
    let basename = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("upload");
    format!("{timestamp_millis}-{basename}")
}
