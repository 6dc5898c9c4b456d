//! Post generation use case - turns ranked articles into platform posts

use crate::model::{Platform, Post, ScoredArticle};

/// Image attached to generated posts when none is configured
pub const DEFAULT_POST_IMAGE: &str = "assets/placeholder.png";

/// Configuration for the post generator
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Path or URL of the placeholder image
    pub image: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            image: DEFAULT_POST_IMAGE.to_string(),
        }
    }
}

/// Renders posts from scored articles
pub struct PostGenerator {
    config: GenerateConfig,
}

impl PostGenerator {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Render one post: the title, then the URL on its own line
    pub fn generate(&self, scored: &ScoredArticle, platform: Platform) -> Post {
        let article = &scored.article;
        Post {
            platform,
            content: format!("{}\n{}", article.title, article.url),
            image: self.config.image.clone(),
            score: scored.score,
        }
    }

    /// Render a post for each (article, platform) pair, article-major
    pub fn generate_all(&self, ranked: &[ScoredArticle], platforms: &[Platform]) -> Vec<Post> {
        ranked
            .iter()
            .flat_map(|scored| {
                platforms
                    .iter()
                    .map(move |platform| self.generate(scored, *platform))
            })
            .collect()
    }
}

impl Default for PostGenerator {
    fn default() -> Self {
        Self::new(GenerateConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;

    fn sample() -> ScoredArticle {
        ScoredArticle {
            article: Article::new(
                "New Bayesian model",
                "Details inside",
                "https://nature.com/articles/abc",
            ),
            score: 50.0,
        }
    }

    #[test]
    fn test_generate_content_layout() {
        let post = PostGenerator::default().generate(&sample(), Platform::LinkedIn);

        assert_eq!(
            post.content,
            "New Bayesian model\nhttps://nature.com/articles/abc"
        );
        assert_eq!(post.image, DEFAULT_POST_IMAGE);
        assert_eq!(post.score, 50.0);
        assert_eq!(post.platform, Platform::LinkedIn);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = PostGenerator::default();
        let a = generator.generate(&sample(), Platform::X);
        let b = generator.generate(&sample(), Platform::X);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_all_is_article_major() {
        let second = ScoredArticle {
            article: Article::new("Other", "", "https://example.com"),
            score: 10.0,
        };
        let posts = PostGenerator::default().generate_all(&[sample(), second], &Platform::ALL);

        assert_eq!(posts.len(), 6);
        assert_eq!(posts[0].platform, Platform::LinkedIn);
        assert_eq!(posts[1].platform, Platform::Bluesky);
        assert_eq!(posts[2].platform, Platform::X);
        assert!(posts[3].content.starts_with("Other"));
    }

    #[test]
    fn test_custom_image() {
        let generator = PostGenerator::new(GenerateConfig {
            image: "https://cdn.example.com/card.png".to_string(),
        });
        let post = generator.generate(&sample(), Platform::Bluesky);
        assert_eq!(post.image, "https://cdn.example.com/card.png");
    }
}
