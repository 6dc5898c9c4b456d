//! Subcommand implementations

pub mod config;
pub mod doctor;
pub mod run;
pub mod score;

use news_curator_domain::{Credentials, Platform};
use secrecy::SecretString;

use crate::config::PlatformsConfig;

/// Read a secret from the environment; missing or blank yields an empty secret
pub(crate) fn load_secret(env_var: &str) -> SecretString {
    let value = if env_var.trim().is_empty() {
        String::new()
    } else {
        std::env::var(env_var).unwrap_or_default()
    };
    SecretString::new(value.trim().to_string().into())
}

/// Whether an env var is set to a non-blank value
pub(crate) fn env_is_set(env_var: &str) -> bool {
    !env_var.trim().is_empty()
        && std::env::var(env_var).is_ok_and(|value| !value.trim().is_empty())
}

/// Build the credentials map once from the configured env vars
pub(crate) fn load_credentials(platforms: &PlatformsConfig) -> Credentials {
    Platform::ALL
        .into_iter()
        .fold(Credentials::new(), |credentials, platform| {
            let env_var = platforms.token_env(platform);
            if !env_is_set(env_var) {
                tracing::debug!(platform = %platform, env = %env_var, "No credential configured");
            }
            credentials.with_token(platform, load_secret(env_var))
        })
}
