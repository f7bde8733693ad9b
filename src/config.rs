use std::env;
use std::path::Path;
use std::time::Duration;

use crate::error::AppError;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

pub const CATALOG_URL_VAR: &str = "CATALOG_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_url: String,
    pub request_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            catalog_url: get_catalog_url()?,
            request_timeout: get_request_timeout(),
        })
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_catalog_url() -> Result<String, AppError> {
    let raw = env::var(CATALOG_URL_VAR).unwrap_or_default();
    let url = raw.trim();
    if url.is_empty() {
        return Err(AppError::ConfigurationMissing(format!(
            "{} is not configured",
            CATALOG_URL_VAR
        )));
    }
    Ok(url.to_string())
}

pub fn get_request_timeout() -> Duration {
    let secs = env::var(REQUEST_TIMEOUT_VAR)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
