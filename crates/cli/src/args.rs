//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// news-curator: fetch, score and turn news articles into social-media posts
#[derive(Parser, Debug)]
#[command(name = "news-curator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and score articles, generate posts, then publish on approval
    Run(RunArgs),

    /// Score a single article without fetching
    Score(ScoreArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Application password. Prefer the hidden prompt or NEWS_CURATOR_PASSWORD;
    /// a value given here shows up in shell history and the process list
    #[arg(long, env = "NEWS_CURATOR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Publish generated posts without asking for confirmation
    #[arg(long)]
    pub approve: bool,

    /// Record approved posts to this JSONL file instead of the simulated publisher
    #[arg(long)]
    pub outbox: Option<PathBuf>,

    /// Keep only articles from credible sources
    #[arg(long)]
    pub credible_only: bool,

    /// Output ranked articles, posts and receipts as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Article title
    #[arg(long)]
    pub title: String,

    /// Article description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Article URL (used for source credibility)
    #[arg(long, default_value = "")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
