//! Run command - authenticate, run the pipeline, then publish on approval

use anyhow::{Context, Result, bail};
use dialoguer::{Confirm, Password, theme::ColorfulTheme};
use news_curator_adapters::{NewsApiSource, OutboxPublisher, OutboxWriter, SimulatedPublisher};
use news_curator_domain::{
    ArticleSource, AuthError, PublishReceipt, Publisher, Session,
    usecases::{
        ContentFetcher, FetchConfig, GenerateConfig, Pipeline, PipelineConfig, PipelineRun,
        PostGenerator, Scorer,
    },
};
use serde::Serialize;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::args::RunArgs;
use crate::commands::{env_is_set, load_credentials, load_secret};
use crate::config::AppConfig;

pub async fn execute(args: RunArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let mut session = Session::new();
    let entered = match args.password.clone() {
        Some(password) => password,
        None => Prompter::detect().password()?,
    };

    let secret = load_secret(&config.auth.password_env);
    match session.authenticate(&entered, &secret) {
        Ok(()) => {}
        Err(AuthError::SecretNotConfigured) => bail!(
            "No application password configured. Set the {} environment variable.",
            config.auth.password_env
        ),
        Err(error) => bail!("Access denied: {}", error),
    }

    let credentials = load_credentials(&config.platforms);
    let platforms = config.platforms.platforms()?;
    let include_only_credible = args.credible_only || config.source.include_only_credible;

    tracing::info!(
        platforms = ?platforms,
        credible_only = include_only_credible,
        outbox = ?args.outbox,
        "Starting news-curator run"
    );

    let publisher: Arc<dyn Publisher> = match &args.outbox {
        Some(path) => {
            let writer = OutboxWriter::new(path.clone())
                .await
                .context("Failed to initialize outbox writer")?;
            tracing::info!(outbox = %path.display(), "Recording approved posts to outbox");
            Arc::new(OutboxPublisher::new(writer))
        }
        None => Arc::new(SimulatedPublisher::new()),
    };

    let pipeline = Pipeline::new(
        build_fetcher(&config)?,
        Scorer::new(config.scoring.to_scoring_config()),
        PostGenerator::new(GenerateConfig {
            image: config.general.image.clone(),
        }),
        publisher,
        PipelineConfig {
            include_only_credible,
            top_n: config.general.top_n,
            platforms,
        },
    );

    let run = pipeline.run(&session).await?;

    if !args.json {
        print_run(&run);
    }

    let approved = if args.approve {
        true
    } else if args.json || run.posts.is_empty() {
        false
    } else {
        Prompter::detect().confirm_publish()?
    };

    let receipts = if approved {
        pipeline.approve(&session, &run.posts, &credentials).await?
    } else {
        tracing::info!("Posts not approved, nothing published");
        vec![]
    };

    if args.json {
        let report = RunReport {
            ranked: &run.ranked,
            posts: &run.posts,
            receipts: &receipts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_receipts(&receipts);
    }

    tracing::info!(
        published = receipts.iter().filter(|r| r.accepted).count(),
        "news-curator run completed"
    );
    Ok(())
}

fn build_fetcher(config: &AppConfig) -> Result<ContentFetcher> {
    let source_config = &config.source;
    let fetch_config = FetchConfig {
        max_pages: source_config.max_pages,
        page_size: source_config.page_size,
        min_interval: Duration::from_millis(source_config.min_interval_ms),
    };

    let source: Option<Arc<dyn ArticleSource>> = if env_is_set(&source_config.api_key_env) {
        let api_key = load_secret(&source_config.api_key_env);
        let news_api = NewsApiSource::with_base_url(
            api_key,
            source_config.base_url.clone(),
            source_config.query.clone(),
            Duration::from_secs(source_config.timeout_secs),
        )
        .context("Failed to initialize news API client")?;
        let news_api: Arc<dyn ArticleSource> = Arc::new(news_api);
        Some(news_api)
    } else {
        tracing::warn!(
            env = %source_config.api_key_env,
            "News API key not set, using fallback data"
        );
        None
    };

    Ok(ContentFetcher::new(
        source,
        config.scoring.credible_sources(),
        fetch_config,
    ))
}

#[derive(Serialize)]
struct RunReport<'a> {
    ranked: &'a [news_curator_domain::ScoredArticle],
    posts: &'a [news_curator_domain::Post],
    receipts: &'a [PublishReceipt],
}

fn print_run(run: &PipelineRun) {
    println!("Top articles");
    println!("============");
    for (idx, scored) in run.ranked.iter().enumerate() {
        let domain = if scored.article.source_domain.is_empty() {
            "unknown source"
        } else {
            scored.article.source_domain.as_str()
        };
        println!(
            "{}. [{:.1}] {} ({})",
            idx + 1,
            scored.score,
            scored.article.title,
            domain
        );
    }

    for (idx, post) in run.posts.iter().enumerate() {
        println!();
        println!("Post {}: {}", idx + 1, post.platform);
        println!("{}", "-".repeat(40));
        println!("{}", post.content);
        println!("Image: {}", post.image);
    }
    println!();
}

fn print_receipts(receipts: &[PublishReceipt]) {
    for receipt in receipts {
        let symbol = if receipt.accepted { "✓" } else { "✗" };
        println!(
            "{} Posted to {}: {}",
            symbol, receipt.platform, receipt.message
        );
    }
}

/// Interactive prompts on a terminal, plain line reads when piped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompter {
    Terminal,
    Plain,
}

impl Prompter {
    fn detect() -> Self {
        Self::from_streams(
            std::io::stdin().is_terminal(),
            std::io::stderr().is_terminal(),
        )
    }

    fn from_streams(stdin_is_terminal: bool, stderr_is_terminal: bool) -> Self {
        if stdin_is_terminal && stderr_is_terminal {
            Prompter::Terminal
        } else {
            Prompter::Plain
        }
    }

    fn password(self) -> Result<String> {
        match self {
            Prompter::Terminal => Password::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter your password")
                .interact()
                .context("Failed to read password"),
            Prompter::Plain => read_line("Enter your password: "),
        }
    }

    fn confirm_publish(self) -> Result<bool> {
        match self {
            Prompter::Terminal => Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Approve and publish?")
                .default(false)
                .interact()
                .context("Failed to read confirmation"),
            Prompter::Plain => {
                let answer = read_line("Approve and publish? [y/N] ")?;
                Ok(is_yes(&answer))
            }
        }
    }
}

fn read_line(message: &str) -> Result<String> {
    eprint!("{}", message);
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
