//! sitesync - Notion → static-site content pipeline
//!
//! Pulls published records from a Notion database, normalizes their
//! heterogeneous property schemas into one uniform content record, and
//! either materializes them as frontmatter+markdown files for the static
//! site build or partitions them into the render-time aggregate.
//!
//! # Architecture
//!
//! One pipeline, two entry points:
//! - `sync`: discovery → paginated query → mapper → router → markdown
//!   documents on disk (staged, swapped into place on success)
//! - `fetch`: the same front half, ending in an in-memory [`SiteData`]
//!   aggregate serialized as JSON
//!
//! # Modules
//!
//! - `notion`: external content API (wire types, HTTP client, trait seam)
//! - `core`: pipeline logic (discovery, query, mapping, materialization)
//! - `domain`: data structures (ContentRecord, SiteData)
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Sync content to ./content
//! NOTION_TOKEN=... NOTION_DB_ID=... sitesync sync
//!
//! # Dump the render-time aggregate
//! sitesync fetch --pretty
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod notion;

// Re-export main types at crate root for convenience
pub use config::Config;
pub use core::{fetch_site_data, run_sync, SyncReport};
pub use domain::{ContentRecord, ContentType, SiteData};
pub use error::SyncError;
pub use notion::{ContentApi, NotionClient, QueryTarget};
