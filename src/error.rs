//! Error taxonomy for the sync pipeline.
//!
//! The pipeline is fail-fast: the first error of any kind terminates the run
//! and is reported to the invoking process. Nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a sync or fetch run
#[derive(Debug, Error)]
pub enum SyncError {
    /// Required credential or identifier missing at startup
    #[error("Missing configuration: {0}")]
    Configuration(String),

    /// Source metadata unreachable or structurally unexpected
    #[error("Schema discovery failed: {0}")]
    Discovery(String),

    /// A paginated query request failed or returned a malformed response
    #[error("Query failed: {0}")]
    Query(String),

    /// The content API answered with a non-success status
    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Frontmatter serialization error: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    /// A persisted document is structurally malformed (no frontmatter header)
    #[error("Malformed document: {0}")]
    Document(String),

    /// Filesystem write failure for a single document (fatal for the run)
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the pipeline
pub type Result<T> = std::result::Result<T, SyncError>;
