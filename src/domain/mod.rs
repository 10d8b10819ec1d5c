//! Domain types for the content pipeline.
//!
//! - ContentRecord: the uniform shape every page is reduced to
//! - SiteData: the partitioned render-time aggregate

pub mod record;
pub mod site;

// Re-export commonly used types
pub use record::{ContentRecord, ContentType};
pub use site::SiteData;
