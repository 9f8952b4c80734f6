use std::time::Duration;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The value could not be parsed as the expected type.
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {key}: '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration, read once at startup and passed into
/// construction — no ambient global.
///
/// Resolution order (lowest to highest priority): built-in defaults,
/// `.env` file, process environment. `.env` never overwrites
/// already-set environment variables (`dotenvy` semantics).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection string for the student store.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Pool acquire timeout for store connections.
    pub connect_timeout: Duration,
}

impl AppConfig {
    pub const DEFAULT_DATABASE_URL: &'static str = "sqlite:students.db?mode=rwc";
    pub const DEFAULT_LISTEN_ADDR: &'static str = "0.0.0.0:3000";
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Load configuration from the process environment.
    ///
    /// Keys: `DATABASE_URL`, `LISTEN_ADDR`, `DB_CONNECT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_DATABASE_URL.to_string());
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| Self::DEFAULT_LISTEN_ADDR.to_string());
        let connect_timeout = match std::env::var("DB_CONNECT_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                    key: "DB_CONNECT_TIMEOUT_SECS",
                    value: raw,
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url,
            listen_addr,
            connect_timeout,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: Self::DEFAULT_DATABASE_URL.to_string(),
            listen_addr: Self::DEFAULT_LISTEN_ADDR.to_string(),
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}
