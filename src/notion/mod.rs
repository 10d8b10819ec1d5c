//! Adapter layer for the external content API.
//!
//! [`ContentApi`] is the seam between the pipeline and the network: the
//! real [`NotionClient`] implements it over HTTP, and tests drive the
//! pipeline with in-process fakes.

pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::NotionClient;
pub use types::{
    Block, BlockChildrenResponse, BlockObject, Database, Page, PropertyValue, QueryRequest,
    QueryResponse,
};

/// The resolved query target for a content source.
///
/// Some backends expose the database through one or more delegated data
/// sources that must be queried instead of the database itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// Query the database directly
    Database(String),
    /// Query a delegated data source
    DataSource(String),
}

impl QueryTarget {
    /// The identifier queries are issued against
    pub fn id(&self) -> &str {
        match self {
            QueryTarget::Database(id) | QueryTarget::DataSource(id) => id,
        }
    }
}

/// Operations the pipeline needs from the content API
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch database metadata (used for schema discovery)
    async fn retrieve_database(&self, database_id: &str) -> Result<Database>;

    /// Issue one paginated query against the resolved target
    async fn query(&self, target: &QueryTarget, request: &QueryRequest) -> Result<QueryResponse>;

    /// Fetch one page of a block's children (used for markdown rendering)
    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<BlockChildrenResponse>;
}
