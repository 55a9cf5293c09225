//! Authentication extractors.
//!
//! - [`auth::AuthAdmin`] -- Extracts the signed-in admin from a JWT Bearer token.

pub mod auth;
