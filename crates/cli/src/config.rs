//! Configuration loading and management

use anyhow::{Context, Result};
use news_curator_domain::{
    Platform,
    policy::{
        CredibleSources, DEFAULT_CREDIBILITY_BONUS, KeywordWeight, default_credible_sources,
        default_keywords,
    },
    usecases::{DEFAULT_POST_IMAGE, DEFAULT_TOP_N, Perturbation, ScoringConfig},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub scoring: ScoringSection,

    #[serde(default)]
    pub platforms: PlatformsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default = "default_image")]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_base_url")]
    pub base_url: String,

    #[serde(default = "default_news_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_query")]
    pub query: String,

    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub include_only_credible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSection {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<KeywordWeight>,

    #[serde(default = "default_credible_sources")]
    pub credible_sources: Vec<String>,

    #[serde(default = "default_credibility_bonus")]
    pub credibility_bonus: f64,

    #[serde(default)]
    pub perturbation: PerturbationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerturbationConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformsConfig {
    #[serde(default = "default_enabled_platforms")]
    pub enabled: Vec<String>,

    #[serde(default = "default_linkedin_token_env")]
    pub linkedin_token_env: String,

    #[serde(default = "default_bluesky_token_env")]
    pub bluesky_token_env: String,

    #[serde(default = "default_x_token_env")]
    pub x_token_env: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_image() -> String {
    DEFAULT_POST_IMAGE.to_string()
}

fn default_password_env() -> String {
    "APP_PASSWORD".to_string()
}

fn default_source_base_url() -> String {
    "https://newsapi.org".to_string()
}

fn default_news_api_key_env() -> String {
    "NEWS_API_KEY".to_string()
}

fn default_query() -> String {
    "\"sports science\" OR \"health analytics\" OR bayesian".to_string()
}

fn default_max_pages() -> u32 {
    3
}

fn default_page_size() -> u32 {
    20
}

fn default_min_interval_ms() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    10
}

fn default_credibility_bonus() -> f64 {
    DEFAULT_CREDIBILITY_BONUS
}

fn default_enabled_platforms() -> Vec<String> {
    Platform::ALL.iter().map(|p| p.key().to_string()).collect()
}

fn default_linkedin_token_env() -> String {
    "LINKEDIN_TOKEN".to_string()
}

fn default_bluesky_token_env() -> String {
    "BLUESKY_TOKEN".to_string()
}

fn default_x_token_env() -> String {
    "X_BEARER_TOKEN".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            top_n: default_top_n(),
            image: default_image(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_env: default_password_env(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_source_base_url(),
            api_key_env: default_news_api_key_env(),
            query: default_query(),
            max_pages: default_max_pages(),
            page_size: default_page_size(),
            min_interval_ms: default_min_interval_ms(),
            timeout_secs: default_timeout(),
            include_only_credible: false,
        }
    }
}

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            credible_sources: default_credible_sources(),
            credibility_bonus: default_credibility_bonus(),
            perturbation: PerturbationConfig::default(),
        }
    }
}

impl Default for PlatformsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_platforms(),
            linkedin_token_env: default_linkedin_token_env(),
            bluesky_token_env: default_bluesky_token_env(),
            x_token_env: default_x_token_env(),
        }
    }
}

impl ScoringSection {
    pub fn credible_sources(&self) -> CredibleSources {
        CredibleSources::new(&self.credible_sources)
    }

    pub fn to_scoring_config(&self) -> ScoringConfig {
        let perturbation = if self.perturbation.enabled {
            Perturbation::Enabled {
                seed: self.perturbation.seed,
            }
        } else {
            Perturbation::Disabled
        };

        ScoringConfig {
            keywords: self.keywords.clone(),
            credible_sources: self.credible_sources(),
            credibility_bonus: self.credibility_bonus,
            perturbation,
        }
    }
}

impl PlatformsConfig {
    /// Enabled platforms in configured order, duplicates removed
    pub fn platforms(&self) -> Result<Vec<Platform>> {
        let mut platforms = Vec::new();
        for name in &self.enabled {
            let platform: Platform = name
                .parse()
                .with_context(|| format!("Invalid entry in platforms.enabled: {}", name))?;
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
        Ok(platforms)
    }

    /// Env var holding the token for a platform
    pub fn token_env(&self, platform: Platform) -> &str {
        match platform {
            Platform::LinkedIn => &self.linkedin_token_env,
            Platform::Bluesky => &self.bluesky_token_env,
            Platform::X => &self.x_token_env,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        builder = builder.add_source(
            config::Environment::with_prefix("NEWS_CURATOR")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# news-curator configuration

[general]
log_level = "info"
# Articles kept after ranking
top_n = 3
image = "assets/placeholder.png"

[auth]
# Env var holding the application password
password_env = "APP_PASSWORD"

[source]
base_url = "https://newsapi.org"
api_key_env = "NEWS_API_KEY"
query = '"sports science" OR "health analytics" OR bayesian'
max_pages = 3
page_size = 20
min_interval_ms = 1000
timeout_secs = 10
include_only_credible = false

[scoring]
credibility_bonus = 30.0
credible_sources = [
    "nature.com", "science.org", "thelancet.com", "bmj.com", "nejm.org",
    "sciencedirect.com", "reuters.com", "apnews.com", "bbc.co.uk", "bbc.com",
    "theguardian.com", "nytimes.com",
]

[scoring.perturbation]
enabled = false
# seed = 42

[[scoring.keywords]]
keyword = "bayesian"
weight = 20

[[scoring.keywords]]
keyword = "sports science"
weight = 15

[[scoring.keywords]]
keyword = "health analytics"
weight = 15

[[scoring.keywords]]
keyword = "peer-reviewed"
weight = 15

[[scoring.keywords]]
keyword = "machine learning"
weight = 10

[platforms]
enabled = ["linkedin", "bluesky", "x"]
linkedin_token_env = "LINKEDIN_TOKEN"
bluesky_token_env = "BLUESKY_TOKEN"
x_token_env = "X_BEARER_TOKEN"
"#
        .to_string()
    }
}
