//! Schema discovery: resolve a database id to its query target.
//!
//! Some backends expose the database through delegated data sources; in that
//! case the first one is queried. A database without data sources is queried
//! directly. A metadata fetch failure is fatal for the run; no retries.

use tracing::debug;

use crate::error::{Result, SyncError};
use crate::notion::{ContentApi, QueryTarget};

/// Resolve the query target for a database
pub async fn resolve_query_target(api: &dyn ContentApi, database_id: &str) -> Result<QueryTarget> {
    let database = api
        .retrieve_database(database_id)
        .await
        .map_err(|e| SyncError::Discovery(format!("database {database_id}: {e}")))?;

    match database.data_sources.first() {
        Some(source) => {
            debug!(
                data_source = %source.id,
                "database delegates to a data source"
            );
            Ok(QueryTarget::DataSource(source.id.clone()))
        }
        None => {
            debug!("database has no data sources, querying directly");
            Ok(QueryTarget::Database(database_id.to_string()))
        }
    }
}
