//! News search API adapter for fetching articles

use async_trait::async_trait;
use news_curator_domain::{Article, ArticleSource, SourceError, extract_domain};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Article source backed by a NewsAPI-compatible `/v2/everything` endpoint
pub struct NewsApiSource {
    client: Client,
    api_key: SecretString,
    base_url: String,
    query: String,
}

impl NewsApiSource {
    pub fn new(api_key: SecretString, query: String, timeout: Duration) -> Result<Self, SourceError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), query, timeout)
    }

    pub fn with_base_url(
        api_key: SecretString,
        base_url: String,
        query: String,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("news-curator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            query,
        })
    }
}

#[derive(Deserialize)]
struct EverythingResponse {
    status: Option<String>,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<ApiArticle>,
}

#[derive(Deserialize)]
struct ApiArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

#[async_trait]
impl ArticleSource for NewsApiSource {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<Article>, SourceError> {
        let url = format!("{}/v2/everything", self.base_url);
        let page = page.to_string();
        let page_size = page_size.to_string();

        tracing::debug!(query = %self.query, page = %page, "Requesting news page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", self.query.as_str()),
                ("page", page.as_str()),
                ("pageSize", page_size.as_str()),
                ("language", "en"),
            ])
            .header("X-Api-Key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(SourceError::Auth("Invalid news API key".to_string()));
        }

        if response.status() == 429 {
            return Err(SourceError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api(format!(
                "Search failed with {}: {}",
                status, body
            )));
        }

        let body: EverythingResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        if body.status.as_deref() == Some("error") {
            return Err(SourceError::Api(body.message.unwrap_or_default()));
        }

        let articles = body
            .articles
            .into_iter()
            .filter_map(|item| {
                let url = item.url.filter(|u| !u.trim().is_empty())?;
                let source_domain = extract_domain(&url);
                Some(Article {
                    title: item.title.unwrap_or_default(),
                    description: item.description.unwrap_or_default(),
                    url,
                    source_domain,
                })
            })
            .collect();

        Ok(articles)
    }

    fn name(&self) -> &'static str {
        "newsapi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_curator_domain::policy::CredibleSources;
    use news_curator_domain::usecases::{ContentFetcher, FetchConfig, fallback_articles};
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> NewsApiSource {
        NewsApiSource::with_base_url(
            SecretString::new("test-key".into()),
            server.uri(),
            "bayesian".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "bayesian"))
            .and(query_param("page", "1"))
            .and(query_param("pageSize", "20"))
            .and(header("X-Api-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "totalResults": 3,
                "articles": [
                    {
                        "title": "Bayesian methods in sport",
                        "description": "A peer-reviewed study",
                        "url": "https://www.Nature.com/articles/1"
                    },
                    {
                        "title": "No description",
                        "description": null,
                        "url": "https://blog.example.net:8443/post"
                    },
                    {
                        "title": "Missing link",
                        "description": "dropped",
                        "url": null
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let articles = source(&mock_server).fetch_page(1, 20).await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].source_domain, "nature.com");
        assert_eq!(articles[0].description, "A peer-reviewed study");
        assert_eq!(articles[1].description, "");
        assert_eq!(articles[1].source_domain, "blog.example.net");
    }

    #[tokio::test]
    async fn test_fetch_page_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).fetch_page(1, 20).await;

        assert!(matches!(result, Err(SourceError::Auth(_))));
    }

    #[tokio::test]
    async fn test_fetch_page_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).fetch_page(1, 20).await;

        assert!(matches!(result, Err(SourceError::RateLimited)));
    }

    #[tokio::test]
    async fn test_fetch_page_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).fetch_page(1, 20).await;

        assert!(matches!(result, Err(SourceError::Api(msg)) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).fetch_page(1, 20).await;

        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_page_error_status_in_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "error",
                "code": "parameterInvalid",
                "message": "bad query"
            })))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).fetch_page(1, 20).await;

        assert!(matches!(result, Err(SourceError::Api(msg)) if msg == "bad query"));
    }

    #[tokio::test]
    async fn test_fetcher_keeps_first_page_when_second_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "articles": [
                    {"title": "One", "description": "", "url": "https://reuters.com/1"},
                    {"title": "Two", "description": "", "url": "https://reuters.com/2"}
                ]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let live: Arc<dyn ArticleSource> = Arc::new(source(&mock_server));
        let fetcher = ContentFetcher::new(
            Some(live),
            CredibleSources::default(),
            FetchConfig {
                max_pages: 3,
                page_size: 2,
                min_interval: Duration::ZERO,
            },
        );

        let articles = fetcher.fetch(false).await;

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].title, "Two");
    }

    #[tokio::test]
    async fn test_fetcher_falls_back_when_endpoint_down() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let live: Arc<dyn ArticleSource> = Arc::new(source(&mock_server));
        let fetcher = ContentFetcher::new(Some(live), CredibleSources::default(), FetchConfig::default());

        assert_eq!(fetcher.fetch(false).await, fallback_articles());
    }
}
