//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use thiserror::Error;

use crate::credentials::Credentials;
use crate::model::{Article, Platform, PublishReceipt};

/// Error type for article source operations
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response: {0}")]
    Parse(String),
}

/// Port for a paged article-search endpoint
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch one page of results (pages start at 1)
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<Article>, SourceError>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Error type for publisher operations
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// Port for sending a post to a platform
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish text to the platform using its credential
    async fn publish(
        &self,
        text: &str,
        platform: Platform,
        credentials: &Credentials,
    ) -> Result<PublishReceipt, PublishError>;
}
