use std::path::PathBuf;

use url::Url;

use crate::backend::AuthorShape;

/// Name of the append-only diagnostic log inside the log directory.
pub const LOG_FILE_NAME: &str = "mcp-server.log";

pub const API_URL_VAR: &str = "PROMPTZ_API_URL";
pub const API_KEY_VAR: &str = "PROMPTZ_API_KEY";
pub const LOG_DIR_VAR: &str = "PROMPTZ_LOG_DIR";
pub const AUTHOR_FIELD_VAR: &str = "PROMPTZ_AUTHOR_FIELD";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set. Please configure it in your MCP settings")]
    MissingVar(&'static str),
    #[error("PROMPTZ_API_URL is not a valid URL: {value}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("PROMPTZ_AUTHOR_FIELD: {0}")]
    InvalidAuthorField(String),
    #[error("cannot determine a home directory for logs; set PROMPTZ_LOG_DIR")]
    NoLogDir,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_url: Url,
    pub api_key: String,
    pub author_shape: AuthorShape,
    pub log_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `PROMPTZ_API_URL` (required): GraphQL endpoint of the catalog
    /// - `PROMPTZ_API_KEY` (required): sent as `x-api-key` on every request
    /// - `PROMPTZ_AUTHOR_FIELD` (optional, `owner_username` or `author`, default
    ///   `owner_username`): how the backend schema exposes the author
    /// - `PROMPTZ_LOG_DIR` (optional, default `~/.promptz/logs`): diagnostic log directory
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar(API_URL_VAR))?;
        let api_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            source,
        })?;

        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let author_shape = match lookup(AUTHOR_FIELD_VAR).filter(|v| !v.trim().is_empty()) {
            Some(field) => field.parse().map_err(ConfigError::InvalidAuthorField)?,
            None => AuthorShape::default(),
        };

        let log_dir = match lookup(LOG_DIR_VAR).filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir().ok_or(ConfigError::NoLogDir)?,
        };

        Ok(Self {
            api_url,
            api_key,
            author_shape,
            log_dir,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

fn default_log_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".promptz").join("logs"))
}
