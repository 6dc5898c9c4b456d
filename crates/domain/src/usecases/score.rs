//! Scoring use case - keyword and source-credibility relevance

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::{Mutex, PoisonError};

use crate::{
    model::{Article, ScoredArticle},
    policy::{
        CredibleSources, DEFAULT_CREDIBILITY_BONUS, KeywordWeight, PERTURBATION_RANGE,
        default_keywords,
    },
};

/// Random noise added to scores
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Perturbation {
    /// Scores are deterministic
    #[default]
    Disabled,
    /// Uniform noise in ±`PERTURBATION_RANGE`, optionally seeded
    Enabled { seed: Option<u64> },
}

/// Configuration for the scorer
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub keywords: Vec<KeywordWeight>,
    pub credible_sources: CredibleSources,
    pub credibility_bonus: f64,
    pub perturbation: Perturbation,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            credible_sources: CredibleSources::default(),
            credibility_bonus: DEFAULT_CREDIBILITY_BONUS,
            perturbation: Perturbation::Disabled,
        }
    }
}

struct CompiledKeyword {
    keyword: String,
    weight: f64,
    pattern: Regex,
}

/// Computes 0-100 relevance scores
pub struct Scorer {
    keywords: Vec<CompiledKeyword>,
    credible_sources: CredibleSources,
    credibility_bonus: f64,
    rng: Option<Mutex<StdRng>>,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        let keywords = compile_keywords(&config.keywords);
        let rng = match config.perturbation {
            Perturbation::Disabled => None,
            Perturbation::Enabled { seed: Some(seed) } => {
                Some(Mutex::new(StdRng::seed_from_u64(seed)))
            }
            Perturbation::Enabled { seed: None } => Some(Mutex::new(StdRng::from_os_rng())),
        };

        Self {
            keywords,
            credible_sources: config.credible_sources,
            credibility_bonus: config.credibility_bonus,
            rng,
        }
    }

    /// Score every article, preserving input order
    pub fn score(&self, articles: &[Article]) -> Vec<ScoredArticle> {
        articles
            .iter()
            .map(|article| ScoredArticle {
                article: article.clone(),
                score: self.score_one(article),
            })
            .collect()
    }

    /// Score a single article
    pub fn score_one(&self, article: &Article) -> f64 {
        let text = format!("{} {}", article.title, article.description).to_lowercase();

        let mut raw: f64 = 0.0;
        for keyword in &self.keywords {
            if keyword.pattern.is_match(&text) {
                tracing::trace!(keyword = %keyword.keyword, weight = keyword.weight, "Keyword hit");
                raw += keyword.weight;
            }
        }

        if self.credible_sources.contains(&article.source_domain) {
            raw += self.credibility_bonus;
        }

        raw += self.noise();

        let score = round_one_decimal(raw.clamp(0.0, 100.0));

        tracing::debug!(
            title = %article.title,
            domain = %article.source_domain,
            score = score,
            "Scored article"
        );

        score
    }

    fn noise(&self) -> f64 {
        match &self.rng {
            Some(rng) => rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .random_range(-PERTURBATION_RANGE..=PERTURBATION_RANGE),
            None => 0.0,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn compile_keywords(keywords: &[KeywordWeight]) -> Vec<CompiledKeyword> {
    keywords
        .iter()
        .filter(|k| !k.keyword.trim().is_empty())
        .filter_map(|k| {
            let source = format!(r"(?i)\b{}\b", regex::escape(k.keyword.trim()));
            match Regex::new(&source) {
                Ok(pattern) => Some(CompiledKeyword {
                    keyword: k.keyword.clone(),
                    weight: f64::from(k.weight),
                    pattern,
                }),
                Err(error) => {
                    tracing::warn!(keyword = %k.keyword, error = %error, "Invalid keyword");
                    None
                }
            }
        })
        .collect()
}
