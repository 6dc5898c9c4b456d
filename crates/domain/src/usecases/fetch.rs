//! Content source use case - paged fetching with fallback and credibility filter

use std::sync::Arc;
use tokio::time::{Duration, Instant, sleep};

use crate::{
    model::Article,
    policy::CredibleSources,
    ports::ArticleSource,
};

/// Configuration for the content fetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum number of pages requested per fetch
    pub max_pages: u32,
    /// Articles requested per page
    pub page_size: u32,
    /// Minimum delay between consecutive page requests
    pub min_interval: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_pages: 3,
            page_size: 20,
            min_interval: Duration::from_millis(1000),
        }
    }
}

/// Built-in articles used when live fetching is unavailable or fails
pub fn fallback_articles() -> Vec<Article> {
    vec![Article {
        title: "Fallback Article".to_string(),
        description: "Placeholder content shown while the live news feed is unavailable."
            .to_string(),
        url: "https://example.com".to_string(),
        source_domain: "example.com".to_string(),
    }]
}

/// Supplies articles to the pipeline; never fails
pub struct ContentFetcher {
    source: Option<Arc<dyn ArticleSource>>,
    credible_sources: CredibleSources,
    config: FetchConfig,
}

impl ContentFetcher {
    pub fn new(
        source: Option<Arc<dyn ArticleSource>>,
        credible_sources: CredibleSources,
        config: FetchConfig,
    ) -> Self {
        Self {
            source,
            credible_sources,
            config,
        }
    }

    /// A fetcher with no live source; always serves the fallback list
    pub fn offline(credible_sources: CredibleSources) -> Self {
        Self::new(None, credible_sources, FetchConfig::default())
    }

    /// Fetch articles, optionally keeping only credible sources
    pub async fn fetch(&self, include_only_credible: bool) -> Vec<Article> {
        let articles = match &self.source {
            Some(source) => {
                let live = self.fetch_live(source.as_ref()).await;
                if live.is_empty() {
                    tracing::warn!(source = source.name(), "No live articles, using fallback data");
                    fallback_articles()
                } else {
                    live
                }
            }
            None => {
                tracing::info!("No live source configured, using fallback data");
                fallback_articles()
            }
        };

        if !include_only_credible {
            return articles;
        }

        let before = articles.len();
        let filtered: Vec<_> = articles
            .into_iter()
            .filter(|a| self.credible_sources.contains(&a.source_domain))
            .collect();

        tracing::debug!(
            before = before,
            after = filtered.len(),
            "Applied credible-source filter"
        );

        filtered
    }

    /// Walk pages until exhausted, limit reached, or a request fails.
    /// Pages collected before a failure are kept.
    async fn fetch_live(&self, source: &dyn ArticleSource) -> Vec<Article> {
        let mut collected = Vec::new();
        let mut last_call: Option<Instant> = None;

        for page in 1..=self.config.max_pages {
            if let Some(last) = last_call {
                let elapsed = last.elapsed();
                if elapsed < self.config.min_interval {
                    sleep(self.config.min_interval - elapsed).await;
                }
            }
            last_call = Some(Instant::now());

            match source.fetch_page(page, self.config.page_size).await {
                Ok(articles) => {
                    let count = articles.len();
                    tracing::info!(source = source.name(), page = page, count = count, "Fetched page");
                    collected.extend(articles);

                    if count < self.config.page_size as usize {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        source = source.name(),
                        page = page,
                        error = %error,
                        kept = collected.len(),
                        "Page fetch failed, stopping pagination"
                    );
                    break;
                }
            }
        }

        collected
    }
}
