//! Pipeline use case - orchestrates fetching, scoring, ranking, generating and publishing

use std::sync::Arc;
use thiserror::Error;

use crate::{
    credentials::Credentials,
    model::{Platform, Post, PublishReceipt, ScoredArticle},
    ports::Publisher,
    session::{AuthError, Session},
    usecases::{
        fetch::ContentFetcher,
        generate::PostGenerator,
        rank::{DEFAULT_TOP_N, rank},
        score::Scorer,
    },
};

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Drop articles from sources outside the credible allow-list
    pub include_only_credible: bool,
    /// Articles kept after ranking
    pub top_n: usize,
    /// Platforms to generate posts for
    pub platforms: Vec<Platform>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            include_only_credible: false,
            top_n: DEFAULT_TOP_N,
            platforms: Platform::ALL.to_vec(),
        }
    }
}

/// Result of the "run pipeline" action
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Top-ranked articles, highest score first
    pub ranked: Vec<ScoredArticle>,
    /// Generated posts awaiting approval
    pub posts: Vec<Post>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Pipeline orchestrator
pub struct Pipeline<P: Publisher + ?Sized> {
    fetcher: ContentFetcher,
    scorer: Scorer,
    generator: PostGenerator,
    publisher: Arc<P>,
    config: PipelineConfig,
}

impl<P: Publisher + ?Sized> Pipeline<P> {
    pub fn new(
        fetcher: ContentFetcher,
        scorer: Scorer,
        generator: PostGenerator,
        publisher: Arc<P>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            fetcher,
            scorer,
            generator,
            publisher,
            config,
        }
    }

    /// Fetch, score, rank and generate posts. Each call starts from scratch.
    pub async fn run(&self, session: &Session) -> Result<PipelineRun, PipelineError> {
        session.require()?;

        let articles = self.fetcher.fetch(self.config.include_only_credible).await;
        tracing::info!(count = articles.len(), "Fetched articles");

        let scored = self.scorer.score(&articles);
        let ranked = rank(scored, self.config.top_n);

        tracing::info!(
            ranked = ranked.len(),
            top_score = ?ranked.first().map(|s| s.score),
            "Ranked articles"
        );

        let posts = self.generator.generate_all(&ranked, &self.config.platforms);
        tracing::info!(count = posts.len(), "Generated posts");

        Ok(PipelineRun { ranked, posts })
    }

    /// Publish approved posts in order; individual failures become rejected receipts
    pub async fn approve(
        &self,
        session: &Session,
        posts: &[Post],
        credentials: &Credentials,
    ) -> Result<Vec<PublishReceipt>, PipelineError> {
        session.require()?;

        let mut receipts = Vec::with_capacity(posts.len());

        for post in posts {
            let receipt = match self
                .publisher
                .publish(&post.content, post.platform, credentials)
                .await
            {
                Ok(receipt) => {
                    tracing::info!(
                        platform = %post.platform,
                        accepted = receipt.accepted,
                        "Published"
                    );
                    receipt
                }
                Err(error) => {
                    tracing::error!(platform = %post.platform, error = %error, "Publish failed");
                    PublishReceipt::rejected(post.platform, error.to_string())
                }
            };
            receipts.push(receipt);
        }

        Ok(receipts)
    }
}
