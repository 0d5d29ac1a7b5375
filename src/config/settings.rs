//! Process settings from environment variables (DB_HOST, DATABASE_NAME, URL_PREFIX, ...).

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DB_USERNAME: &str = "DB_USERNAME";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_HOST: &str = "DB_HOST";
pub const DATABASE_NAME: &str = "DATABASE_NAME";
pub const URL_PREFIX: &str = "URL_PREFIX";
pub const BIND_ADDR: &str = "BIND_ADDR";
pub const MODELS_DIR: &str = "MODELS_DIR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MODELS_DIR: &str = "models";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    /// Host, optionally with port, e.g. "localhost:27017".
    pub db_host: String,
    pub database_name: String,
    /// Normalised: empty, or a leading `/` with no trailing `/`.
    pub url_prefix: String,
    pub bind_addr: String,
    pub models_dir: PathBuf,
}

impl Settings {
    /// Read from the process environment. Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Settings {
            db_username: get(DB_USERNAME),
            db_password: get(DB_PASSWORD),
            db_host: get(DB_HOST).ok_or(ConfigError::MissingSetting(DB_HOST))?,
            database_name: get(DATABASE_NAME).ok_or(ConfigError::MissingSetting(DATABASE_NAME))?,
            url_prefix: normalize_prefix(get(URL_PREFIX).as_deref().unwrap_or("")),
            bind_addr: get(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            models_dir: get(MODELS_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODELS_DIR)),
        })
    }

    /// `mongodb://{host}/{database_name}`. Credentials are applied to client options, not embedded here.
    pub fn mongo_uri(&self) -> String {
        format!("mongodb://{}/{}", self.db_host, self.database_name)
    }
}

/// "api/v1/" -> "/api/v1", "/" -> "", "" -> "".
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
