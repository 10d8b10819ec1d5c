//! Core pipeline logic.
//!
//! This module contains:
//! - Discovery: resolve a database id to its query target
//! - Query: cursor-paginated retrieval of published records
//! - Mapper: raw page → uniform content record
//! - Markdown: block tree → markdown string
//! - Materializer: frontmatter + body documents on disk
//! - Sync: the batch and render entrypoints

pub mod discovery;
pub mod mapper;
pub mod markdown;
pub mod materializer;
pub mod query;
pub mod sync;

// Re-export commonly used types
pub use discovery::resolve_query_target;
pub use mapper::map_page;
pub use markdown::page_to_markdown;
pub use materializer::{parse_document, render_document, write_record, Frontmatter};
pub use query::{fetch_published, QueryOptions};
pub use sync::{fetch_site_data, run_sync, SyncReport};
