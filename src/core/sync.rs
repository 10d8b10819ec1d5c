//! Pipeline entrypoints.
//!
//! Both paths share discovery, pagination, and mapping; they differ only in
//! what happens to the mapped records. The batch path materializes documents
//! into a staging directory and swaps it into place once the whole run has
//! succeeded, so a mid-run failure leaves the previous content tree intact.

use tracing::{info, warn};

use super::discovery::resolve_query_target;
use super::mapper::map_page;
use super::markdown::page_to_markdown;
use super::materializer::write_record;
use super::query::{fetch_published, QueryOptions};
use crate::config::Config;
use crate::domain::SiteData;
use crate::error::{Result, SyncError};
use crate::notion::ContentApi;

/// Summary of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Documents written
    pub written: usize,

    /// Records skipped for lacking a slug
    pub skipped: usize,
}

impl Config {
    fn query_options(&self) -> QueryOptions {
        QueryOptions {
            published_value: self.published_value.clone(),
            page_size: self.page_size,
        }
    }
}

/// Batch path: sync all published records to the content tree on disk.
///
/// All-or-nothing: the first failure aborts the run before the swap and the
/// previous output stays untouched.
pub async fn run_sync(config: &Config, api: &dyn ContentApi) -> Result<SyncReport> {
    let target = resolve_query_target(api, &config.database_id).await?;
    let pages = fetch_published(api, &target, &config.query_options()).await?;
    info!(
        target = target.id(),
        records = pages.len(),
        "fetched published records"
    );

    let staging = config.staging_dir();
    if staging.exists() {
        tokio::fs::remove_dir_all(&staging)
            .await
            .map_err(|source| SyncError::Write {
                path: staging.clone(),
                source,
            })?;
    }

    let mut report = SyncReport::default();

    for page in &pages {
        let record = map_page(page);

        if record.slug.is_empty() {
            warn!(id = %record.id, title = %record.title, "skipping record without slug");
            report.skipped += 1;
            continue;
        }

        let body = page_to_markdown(api, &page.id).await?;
        let path = write_record(&staging, &record, &body).await?;
        info!(path = %path.display(), "wrote document");
        report.written += 1;
    }

    swap_into_place(&staging, config).await?;
    info!(
        written = report.written,
        skipped = report.skipped,
        "sync complete"
    );

    Ok(report)
}

/// Replace the previous output tree with the freshly staged one
async fn swap_into_place(staging: &std::path::Path, config: &Config) -> Result<()> {
    // A run with zero written documents still replaces the tree: the source
    // of truth says there is nothing published
    if !staging.exists() {
        tokio::fs::create_dir_all(staging)
            .await
            .map_err(|source| SyncError::Write {
                path: staging.to_path_buf(),
                source,
            })?;
    }

    if config.output_dir.exists() {
        tokio::fs::remove_dir_all(&config.output_dir)
            .await
            .map_err(|source| SyncError::Write {
                path: config.output_dir.clone(),
                source,
            })?;
    }

    tokio::fs::rename(staging, &config.output_dir)
        .await
        .map_err(|source| SyncError::Write {
            path: config.output_dir.clone(),
            source,
        })?;

    Ok(())
}

/// Render path: fetch and partition everything a single render needs.
///
/// No filesystem effects; the aggregate lives only for one render.
pub async fn fetch_site_data(config: &Config, api: &dyn ContentApi) -> Result<SiteData> {
    let target = resolve_query_target(api, &config.database_id).await?;
    let pages = fetch_published(api, &target, &config.query_options()).await?;

    let records = pages.iter().map(map_page).collect();
    Ok(SiteData::from_records(records))
}
