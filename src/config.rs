//! Runtime configuration for the sync pipeline.
//!
//! Configuration is read from the environment exactly once, at startup, into
//! an explicit [`Config`] that is passed by reference to every component.
//! There is no process-global lookup anywhere else in the crate.
//!
//! Environment variables:
//! - `NOTION_TOKEN` (required): integration token, sent as a bearer header
//! - `NOTION_DB_ID` (required): database to sync from
//! - `NOTION_VERSION`: API version header (default `2022-06-28`)
//! - `NOTION_API_URL`: API base URL (default `https://api.notion.com/v1`)
//! - `NOTION_PUBLISHED_VALUE`: status value that marks a record as live
//!   (default `Published`)
//! - `SITESYNC_OUTPUT`: content output directory (default `content`)

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, SyncError};

/// Default API version header value
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Default status value that marks a record as published
pub const DEFAULT_PUBLISHED_VALUE: &str = "Published";

/// Default output directory for materialized content
pub const DEFAULT_OUTPUT_DIR: &str = "content";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API bearer token
    pub token: String,

    /// Database to sync from
    pub database_id: String,

    /// API version header value
    pub api_version: String,

    /// API base URL (overridable so tests can point at a local server)
    pub base_url: String,

    /// Status value that marks a record as published
    pub published_value: String,

    /// Output directory for materialized content
    pub output_dir: PathBuf,

    /// Page size for paginated queries
    pub page_size: u32,

    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Fails with [`SyncError::Configuration`] if the token or database id
    /// is missing; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let token = require_env("NOTION_TOKEN")?;
        let database_id = require_env("NOTION_DB_ID")?;

        Ok(Self {
            token,
            database_id,
            api_version: env_or("NOTION_VERSION", DEFAULT_API_VERSION),
            base_url: env_or("NOTION_API_URL", DEFAULT_BASE_URL),
            published_value: env_or("NOTION_PUBLISHED_VALUE", DEFAULT_PUBLISHED_VALUE),
            output_dir: PathBuf::from(env_or("SITESYNC_OUTPUT", DEFAULT_OUTPUT_DIR)),
            page_size: 100,
            timeout: Duration::from_secs(30),
        })
    }

    /// Staging directory the batch path writes into before the final swap
    pub fn staging_dir(&self) -> PathBuf {
        let mut name = self
            .output_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        name.push_str(".staging");
        self.output_dir.with_file_name(name)
    }
}

fn require_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SyncError::Configuration(format!(
            "environment variable {key} is not set"
        ))),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            token: "secret".into(),
            database_id: "db_1".into(),
            api_version: DEFAULT_API_VERSION.into(),
            base_url: DEFAULT_BASE_URL.into(),
            published_value: DEFAULT_PUBLISHED_VALUE.into(),
            output_dir: PathBuf::from("content"),
            page_size: 100,
            timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn staging_dir_is_sibling_of_output() {
        let config = test_config();
        assert_eq!(config.staging_dir(), PathBuf::from("content.staging"));

        let nested = Config {
            output_dir: PathBuf::from("site/content"),
            ..test_config()
        };
        assert_eq!(nested.staging_dir(), PathBuf::from("site/content.staging"));
    }

    #[test]
    fn require_env_rejects_missing() {
        let err = require_env("SITESYNC_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(err, SyncError::Configuration(_)));
    }
}
