//! Score command - score one ad-hoc article with the configured policy

use anyhow::Result;
use news_curator_domain::{Article, usecases::Scorer};
use serde::Serialize;
use std::path::PathBuf;

use crate::args::ScoreArgs;
use crate::config::AppConfig;

#[derive(Serialize)]
struct ScoreOutput<'a> {
    title: &'a str,
    url: &'a str,
    source_domain: &'a str,
    credible: bool,
    score: f64,
}

pub async fn execute(args: ScoreArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let article = Article::new(args.title, args.description, args.url);
    let credible = config
        .scoring
        .credible_sources()
        .contains(&article.source_domain);
    let scorer = Scorer::new(config.scoring.to_scoring_config());
    let score = scorer.score_one(&article);

    if args.json {
        let output = ScoreOutput {
            title: &article.title,
            url: &article.url,
            source_domain: &article.source_domain,
            credible,
            score,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Title:  {}", article.title);
        if !article.source_domain.is_empty() {
            let marker = if credible { " (credible)" } else { "" };
            println!("Source: {}{}", article.source_domain, marker);
        }
        println!("Score:  {:.1}", score);
    }

    Ok(())
}
