//! Domain models and value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A news article as supplied by a content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Headline
    pub title: String,
    /// Short description or lede
    pub description: String,
    /// Link to the full article
    pub url: String,
    /// Lowercase host without "www." or port, or empty when unknown
    pub source_domain: String,
}

impl Article {
    /// Build an article, deriving `source_domain` from the URL
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let url = url.into();
        let source_domain = crate::host::extract_domain(&url);
        Self {
            title: title.into(),
            description: description.into(),
            url,
            source_domain,
        }
    }
}

/// An article with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: Article,
    /// Relevance in [0, 100], rounded to one decimal
    pub score: f64,
}

/// Social platforms a post can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[serde(rename = "linkedin")]
    LinkedIn,
    Bluesky,
    X,
}

impl Platform {
    /// Every supported platform, in display order
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Bluesky, Platform::X];

    /// Stable lowercase key used in config and credential lookup
    pub fn key(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Bluesky => "bluesky",
            Platform::X => "x",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Bluesky => "Bluesky",
            Platform::X => "X",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Platform::LinkedIn),
            "bluesky" => Ok(Platform::Bluesky),
            "x" | "twitter" => Ok(Platform::X),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// A generated social-media post awaiting approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Target platform
    pub platform: Platform,
    /// Post text
    pub content: String,
    /// Path or URL of the attached image
    pub image: String,
    /// Score of the article the post was generated from
    pub score: f64,
}

/// Outcome of handing a post to a publisher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub platform: Platform,
    /// Whether the platform accepted the post
    pub accepted: bool,
    /// Status message for display
    pub message: String,
}

impl PublishReceipt {
    pub fn accepted(platform: Platform, message: impl Into<String>) -> Self {
        Self {
            platform,
            accepted: true,
            message: message.into(),
        }
    }

    pub fn rejected(platform: Platform, message: impl Into<String>) -> Self {
        Self {
            platform,
            accepted: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_new_derives_domain() {
        let article = Article::new("Title", "Desc", "https://www.Nature.com/articles/1");
        assert_eq!(article.source_domain, "nature.com");
    }

    #[test]
    fn test_platform_parse_is_case_insensitive() {
        assert_eq!("LinkedIn".parse::<Platform>().unwrap(), Platform::LinkedIn);
        assert_eq!("BLUESKY".parse::<Platform>().unwrap(), Platform::Bluesky);
        assert_eq!("twitter".parse::<Platform>().unwrap(), Platform::X);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_serde_uses_keys() {
        let json = serde_json::to_string(&Platform::LinkedIn).unwrap();
        assert_eq!(json, "\"linkedin\"");
        let parsed: Platform = serde_json::from_str("\"bluesky\"").unwrap();
        assert_eq!(parsed, Platform::Bluesky);
    }
}
