//! GitHub search API access.

pub mod client;
pub mod search;

pub use client::{api_base_uri, create_client};
pub use search::OctocrabSearch;

use async_trait::async_trait;

use crate::error::Result;

/// Issue/PR search against the hosting service.
///
/// Results are returned in the order the service ranks them.
#[async_trait]
pub trait PullRequestSearch: Send + Sync {
    /// Run a search query and return the numbers of the matching issues
    async fn search_issues(&self, query: &str) -> Result<Vec<u64>>;
}
