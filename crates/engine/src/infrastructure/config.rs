//! Engine configuration read from the environment.

use std::fmt;
use std::time::Duration;

/// Shortest accepted HS256 signing secret, in bytes.
pub const MIN_SIGNING_KEY_BYTES: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Symmetric secret for token signatures. Loaded once at startup and never
/// mutated.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_SIGNING_KEY_BYTES {
            return Err(ConfigError::Invalid {
                var: "JWT_KEY",
                reason: format!("must be at least {MIN_SIGNING_KEY_BYTES} bytes"),
            });
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

/// Connection pool and lock-wait limits for the SQLite store.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub busy_timeout: Duration,
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub database: DatabaseSettings,
    pub signing_key: SigningKey,
    /// `*` or a comma-separated origin list; `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let signing_key = var("JWT_KEY")
            .ok_or(ConfigError::Missing("JWT_KEY"))
            .and_then(SigningKey::new)?;

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(port) => parse_var("SERVER_PORT", &port)?,
            None => 3000,
        };

        let mut database =
            DatabaseSettings::new(var("DATABASE_URL").unwrap_or_else(|| "sqlite:worlds.db".into()));
        if let Some(value) = var("DB_MAX_CONNECTIONS") {
            database.max_connections = parse_var("DB_MAX_CONNECTIONS", &value)?;
        }
        if let Some(value) = var("DB_ACQUIRE_TIMEOUT_SECS") {
            database.acquire_timeout =
                Duration::from_secs(parse_var("DB_ACQUIRE_TIMEOUT_SECS", &value)?);
        }
        if let Some(value) = var("DB_BUSY_TIMEOUT_SECS") {
            database.busy_timeout = Duration::from_secs(parse_var("DB_BUSY_TIMEOUT_SECS", &value)?);
        }
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            database,
            signing_key,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        })
    }
}

fn parse_var<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: name,
        reason: e.to_string(),
    })
}
