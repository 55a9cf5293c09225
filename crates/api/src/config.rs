use std::fmt;

use maya_storage::S3StoreConfig;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the secrets and the database/storage locations has a
/// default suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Credentials for the first admin account.
    pub bootstrap_admin: BootstrapAdmin,
    /// Media bucket settings.
    pub storage: S3StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`JwtConfig::from_env`], [`BootstrapAdmin::from_env`] and
    /// [`storage_from_env`] for the remaining variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            bootstrap_admin: BootstrapAdmin::from_env(),
            storage: storage_from_env(),
        }
    }
}

/// Load media bucket settings.
///
/// | Env Var              | Default     |
/// |----------------------|-------------|
/// | `STORAGE_BUCKET`     | `media`     |
/// | `STORAGE_REGION`     | `us-east-1` |
/// | `STORAGE_ENDPOINT`   | unset       |
/// | `STORAGE_PUBLIC_URL` | **required**|
pub fn storage_from_env() -> S3StoreConfig {
    let endpoint = std::env::var("STORAGE_ENDPOINT")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    S3StoreConfig {
        bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "media".into()),
        region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".into()),
        endpoint,
        public_base_url: std::env::var("STORAGE_PUBLIC_URL")
            .expect("STORAGE_PUBLIC_URL must be set in the environment"),
    }
}

/// Default bootstrap admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "vishwa";
/// Default bootstrap admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "mayaagency";

/// Credentials used by `POST /api/admin/init` and the seeder.
#[derive(Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for BootstrapAdmin {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl BootstrapAdmin {
    /// Read `ADMIN_USERNAME` / `ADMIN_PASSWORD`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            username: std::env::var("ADMIN_USERNAME")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.username),
            password: std::env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.password),
        }
    }
}
