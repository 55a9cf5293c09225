//! Bearer-token generation and validation.
//!
//! Tokens are HS256-signed JWTs carrying the admin's id and username. They
//! are stateless: there is no server-side session, so a token stays valid
//! until it expires or the signing secret is rotated.

use std::fmt;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use maya_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The admin's internal database id.
    pub id: DbId,
    pub username: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Unique token identifier, useful when correlating logs.
    pub jti: String,
}

/// Configuration for token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

/// Default token lifetime in hours.
pub const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}

impl JwtConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | **yes**  | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            expiry_hours,
        }
    }
}

/// Issue a token for the given admin, valid for `config.expiry_hours`.
pub fn generate_token(
    admin_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    generate_token_at(admin_id, username, chrono::Utc::now().timestamp(), config)
}

/// Issue a token as if it had been issued at `issued_at` (Unix seconds).
pub fn generate_token_at(
    admin_id: DbId,
    username: &str,
    issued_at: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        id: admin_id,
        username: username.to_string(),
        iat: issued_at,
        exp: issued_at + config.expiry_hours * 3600,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a token's signature and expiry, returning its [`Claims`].
///
/// No leeway is granted: a token is rejected from its `exp` second onwards.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_SECS: i64 = 24 * 3600;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: DEFAULT_EXPIRY_HOURS,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let config = test_config();
        let token = generate_token(42, "vishwa", &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.username, "vishwa");
        assert_eq!(claims.exp - claims.iat, DAY_SECS);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let token = generate_token_at(1, "admin", now - DAY_SECS + 120, &config).unwrap();
        assert!(validate_token(&token, &config).is_ok());
    }

    #[test]
    fn test_token_rejected_after_expiry() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let token = generate_token_at(1, "admin", now - DAY_SECS - 5, &config).unwrap();
        assert!(
            validate_token(&token, &config).is_err(),
            "a token older than 24 hours must fail validation"
        );
    }

    #[test]
    fn test_tampered_payload_fails() {
        let config = test_config();
        let token = generate_token(1, "admin", &config).unwrap();

        // Swap the payload for one claiming a different admin id, keeping
        // the original signature.
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = {
            let other = generate_token(2, "admin", &config).unwrap();
            other.split('.').nth(1).unwrap().to_string()
        };
        parts[1] = &forged_payload;
        let forged = parts.join(".");

        assert!(validate_token(&forged, &config).is_err());
    }

    #[test]
    fn test_tampered_signature_fails() {
        let config = test_config();
        let token = generate_token(1, "admin", &config).unwrap();
        // Flip a character well inside the signature segment so the change
        // cannot land in base64 padding bits.
        let mut chars: Vec<char> = token.chars().collect();
        let idx = chars.len() - 10;
        chars[idx] = if chars[idx] == 'A' { 'B' } else { 'A' };
        let forged: String = chars.into_iter().collect();
        assert!(validate_token(&forged, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            expiry_hours: 24,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            expiry_hours: 24,
        };

        let token = generate_token(1, "admin", &config_a).expect("token generation should succeed");
        assert!(validate_token(&token, &config_b).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains("test-secret"));
    }
}
