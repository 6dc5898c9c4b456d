//! Scoring policy: keyword weights and the credible-source allow-list

use serde::{Deserialize, Serialize};

/// Flat bonus for articles from a credible source
pub const DEFAULT_CREDIBILITY_BONUS: f64 = 30.0;

/// Perturbation range applied when scoring noise is enabled
pub const PERTURBATION_RANGE: f64 = 5.0;

/// A keyword phrase and the score it contributes on a whole-word match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: u32,
}

impl KeywordWeight {
    pub fn new(keyword: impl Into<String>, weight: u32) -> Self {
        Self {
            keyword: keyword.into(),
            weight,
        }
    }
}

/// The built-in keyword weight table
pub fn default_keywords() -> Vec<KeywordWeight> {
    vec![
        KeywordWeight::new("bayesian", 20),
        KeywordWeight::new("sports science", 15),
        KeywordWeight::new("health analytics", 15),
        KeywordWeight::new("peer-reviewed", 15),
        KeywordWeight::new("machine learning", 10),
    ]
}

/// The built-in credible-source allow-list
pub fn default_credible_sources() -> Vec<String> {
    [
        "nature.com",
        "science.org",
        "thelancet.com",
        "bmj.com",
        "nejm.org",
        "sciencedirect.com",
        "reuters.com",
        "apnews.com",
        "bbc.co.uk",
        "bbc.com",
        "theguardian.com",
        "nytimes.com",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Set of domains that earn the credibility bonus
#[derive(Debug, Clone, PartialEq)]
pub struct CredibleSources {
    domains: Vec<String>,
}

impl CredibleSources {
    /// Build from a list of domains; entries are normalized to lowercase
    /// without a "www." prefix
    pub fn new(domains: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut domains: Vec<String> = domains
            .into_iter()
            .map(|d| {
                let d = d.as_ref().trim().to_lowercase();
                d.strip_prefix("www.").map(str::to_string).unwrap_or(d)
            })
            .filter(|d| !d.is_empty())
            .collect();
        domains.sort();
        domains.dedup();
        Self { domains }
    }

    /// Whether the given normalized domain is on the list
    pub fn contains(&self, domain: &str) -> bool {
        !domain.is_empty() && self.domains.binary_search_by(|d| d.as_str().cmp(domain)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for CredibleSources {
    fn default() -> Self {
        Self::new(default_credible_sources())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keyword_weights_sum() {
        let total: u32 = default_keywords().iter().map(|k| k.weight).sum();
        assert_eq!(total, 75);
    }

    #[test]
    fn test_credible_sources_normalizes_entries() {
        let sources = CredibleSources::new(["WWW.Reuters.com", " nature.com ", "nature.com"]);
        assert_eq!(sources.len(), 2);
        assert!(sources.contains("reuters.com"));
        assert!(sources.contains("nature.com"));
    }

    #[test]
    fn test_empty_domain_is_never_credible() {
        let sources = CredibleSources::new(["", "bmj.com"]);
        assert!(!sources.contains(""));
        assert!(sources.contains("bmj.com"));
        assert!(!sources.contains("example.com"));
    }
}
