//! Handlers for contact-form messages.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use maya_core::content::{contact_subject, CONTACT_ACK_MESSAGE};
use maya_core::error::CoreError;
use maya_core::types::DbId;
use maya_db::models::contact::{ContactMessage, CreateContact, NewContactMessage};
use maya_db::repositories::ContactRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::middleware::auth::AuthAdmin;
use crate::response::{ContactReceipt, MessageResponse};
use crate::state::AppState;

/// POST /api/contact
///
/// Once the required fields are present the visitor always gets a success
/// receipt; a failed insert is only logged.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<CreateContact>, JsonRejection>,
) -> AppResult<Json<ContactReceipt>> {
    let message = accept(payload)?;

    match ContactRepo::create(&state.pool, &message).await {
        Ok(stored) => tracing::info!(contact_id = stored.id, "Contact message stored"),
        Err(e) => tracing::error!(error = %e, "Failed to store contact message"),
    }

    Ok(Json(ContactReceipt {
        message: CONTACT_ACK_MESSAGE,
        success: true,
    }))
}

/// Turn a raw submission into an insertable message, rejecting anything
/// without a name, email and message.
fn accept(
    payload: Result<Json<CreateContact>, JsonRejection>,
) -> Result<NewContactMessage, AppError> {
    let missing = || AppError::Core(CoreError::Validation("Missing required fields".into()));

    let Json(input) = payload.map_err(|_| missing())?;
    input.validate().map_err(|_| missing())?;

    let subject = contact_subject(input.subject.as_deref()).to_string();
    match (input.name, input.email, input.message) {
        (Some(name), Some(email), Some(message)) => Ok(NewContactMessage {
            name,
            email,
            subject,
            message,
        }),
        _ => Err(missing()),
    }
}

/// GET /api/admin/contacts
pub async fn list(
    _admin: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(contacts))
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Contact", id));
    }
    tracing::info!(admin_id = admin.admin_id, contact_id = id, "Contact message deleted");
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn submission(name: &str, email: &str, subject: Option<&str>, message: &str) -> CreateContact {
        CreateContact {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: subject.map(Into::into),
            message: Some(message.into()),
        }
    }

    #[test]
    fn blank_subject_gets_default() {
        let msg = accept(Ok(Json(submission("Ann", "a@x.io", Some("  "), "Hi")))).unwrap();
        assert_eq!(msg.subject, "No Subject");
    }

    #[test]
    fn missing_message_is_rejected() {
        let mut input = submission("Ann", "a@x.io", None, "Hi");
        input.message = None;
        assert_matches!(
            accept(Ok(Json(input))),
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "Missing required fields"
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_matches!(
            accept(Ok(Json(submission("", "a@x.io", None, "Hi")))),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}
