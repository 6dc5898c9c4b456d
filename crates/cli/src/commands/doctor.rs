//! Doctor command - validate configuration and show status

use anyhow::Result;
use news_curator_domain::Platform;
use serde::Serialize;
use std::path::PathBuf;

use crate::args::DoctorArgs;
use crate::commands::env_is_set;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    auth: CheckResult,
    news_source: CheckResult,
    scoring: CheckResult,
    platforms: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
    details: Option<serde_json::Value>,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        auth: CheckResult::error("Not checked"),
        news_source: CheckResult::error("Not checked"),
        scoring: CheckResult::error("Not checked"),
        platforms: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {:#}", e));
            None
        }
    };

    if let Some(ref config) = config {
        report.auth = check_auth(config);
        report.news_source = check_news_source(config);
        report.scoring = check_scoring(config);
        report.platforms = check_platforms(config);
    }

    let checks = [
        &report.config,
        &report.auth,
        &report.news_source,
        &report.scoring,
        &report.platforms,
    ];

    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

fn check_auth(config: &AppConfig) -> CheckResult {
    let env_var = &config.auth.password_env;

    if env_var.trim().is_empty() {
        return CheckResult::error("No password env var configured");
    }

    if env_is_set(env_var) {
        CheckResult::ok(format!("Password: {} (set)", env_var))
    } else {
        CheckResult::error(format!(
            "Password: {} (not set), the run command will refuse access",
            env_var
        ))
    }
}

fn check_news_source(config: &AppConfig) -> CheckResult {
    let source = &config.source;

    if source.base_url.trim().is_empty() {
        return CheckResult::error("News source base_url is empty");
    }

    if source.max_pages == 0 || source.page_size == 0 {
        return CheckResult::warn("max_pages or page_size is 0, fallback data will always be used");
    }

    let details = serde_json::json!({
        "base_url": source.base_url,
        "max_pages": source.max_pages,
        "page_size": source.page_size,
        "min_interval_ms": source.min_interval_ms,
    });

    if env_is_set(&source.api_key_env) {
        CheckResult::ok(format!("API key: {} (set)", source.api_key_env)).with_details(details)
    } else {
        CheckResult::warn(format!(
            "API key: {} (not set), fallback data will be used",
            source.api_key_env
        ))
        .with_details(details)
    }
}

fn check_scoring(config: &AppConfig) -> CheckResult {
    let scoring = &config.scoring;

    if scoring.keywords.is_empty() {
        return CheckResult::warn("No keywords configured, only credibility contributes to scores");
    }

    let result = CheckResult::ok(format!(
        "{} keywords, {} credible sources, bonus {}",
        scoring.keywords.len(),
        scoring.credible_sources().len(),
        scoring.credibility_bonus
    ));

    if scoring.perturbation.enabled {
        CheckResult::warn(format!(
            "{}; random perturbation enabled (seed: {:?})",
            result.message, scoring.perturbation.seed
        ))
    } else {
        result
    }
}

fn check_platforms(config: &AppConfig) -> CheckResult {
    let platforms = match config.platforms.platforms() {
        Ok(p) => p,
        Err(e) => return CheckResult::error(format!("{:#}", e)),
    };

    if platforms.is_empty() {
        return CheckResult::warn("No platforms enabled");
    }

    let tokens: serde_json::Map<String, serde_json::Value> = Platform::ALL
        .iter()
        .map(|p| {
            (
                p.key().to_string(),
                serde_json::Value::Bool(env_is_set(config.platforms.token_env(*p))),
            )
        })
        .collect();

    let labels: Vec<_> = platforms.iter().map(|p| p.label()).collect();

    CheckResult::ok(format!("Enabled: {}", labels.join(", ")))
        .with_details(serde_json::Value::Object(tokens))
}

fn print_report(report: &DoctorReport) {
    println!("news-curator Doctor Report");
    println!("==========================");
    println!();

    print_check("Config", &report.config);
    print_check("Password", &report.auth);
    print_check("News Source", &report.news_source);
    print_check("Scoring", &report.scoring);
    print_check("Platforms", &report.platforms);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall != "error" {
        println!();
        println!("Ready to run! Try: news-curator run");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
