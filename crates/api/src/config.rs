use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database file (default: `./notes.db`).
    pub database_path: PathBuf,
    /// Upper bound on pooled SQLite connections (default: `5`).
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            database_path: PathBuf::from("./notes.db"),
            database_max_connections: 5,
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default       |
    /// |----------------------------|---------------|
    /// | `HOST`                     | `0.0.0.0`     |
    /// | `PORT`                     | `5000`        |
    /// | `DATABASE_PATH`            | `./notes.db`  |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`           |
    /// | `CORS_ORIGINS`             | (any origin)  |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(v) => parse_var("PORT", "u16", v)?,
            None => defaults.port,
        };

        let database_path = lookup("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => parse_var("DATABASE_MAX_CONNECTIONS", "u32", v)?,
            None => defaults.database_max_connections,
        };

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => parse_var("REQUEST_TIMEOUT_SECS", "u64", v)?,
            None => defaults.request_timeout_secs,
        };

        Ok(Self {
            host,
            port,
            database_path,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
