//! Request body extractors.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use maya_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that has been deserialized and then checked with
/// [`validator::Validate`].
///
/// Malformed JSON, wrong field types and failed validation rules all become
/// 400 `VALIDATION_ERROR` responses.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(describe(&errors))))?;
        Ok(ValidatedJson(value))
    }
}

/// URL path parameters. Unparseable segments (e.g. a non-numeric id) become
/// 400 `VALIDATION_ERROR` JSON responses instead of axum's plain-text body.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        Ok(Path(value))
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    AppError::Core(CoreError::Validation(rejection.body_text()))
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::Core(CoreError::Validation(rejection.body_text()))
}

/// Flatten validator errors into `field: message; field: message`.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{field}: {detail}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
