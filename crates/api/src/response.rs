//! Small response bodies shared by several handlers.
//!
//! Entities are returned bare (no envelope); these cover the acknowledgement
//! shapes the admin and public clients expect.

use serde::Serialize;

/// `{ "message": "..." }`, returned by deletes and password changes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement for a contact form submission.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub message: &'static str,
    pub success: bool,
}
