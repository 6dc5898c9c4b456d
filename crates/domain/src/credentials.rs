//! Per-platform publishing credentials

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::model::Platform;

/// Read-only map of platform tokens, populated once at startup.
///
/// A platform without a token resolves to an empty secret.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    tokens: HashMap<Platform, SecretString>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a token for a platform
    pub fn with_token(mut self, platform: Platform, token: SecretString) -> Self {
        self.tokens.insert(platform, token);
        self
    }

    /// Token for the platform, empty when absent
    pub fn token(&self, platform: Platform) -> SecretString {
        self.tokens
            .get(&platform)
            .cloned()
            .unwrap_or_else(|| SecretString::new("".into()))
    }

    /// Whether a non-empty token is present for the platform
    pub fn has_token(&self, platform: Platform) -> bool {
        self.tokens
            .get(&platform)
            .is_some_and(|t| !t.expose_secret().trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_empty() {
        let creds = Credentials::new();
        assert_eq!(creds.token(Platform::X).expose_secret(), "");
        assert!(!creds.has_token(Platform::X));
    }

    #[test]
    fn test_present_token() {
        let creds =
            Credentials::new().with_token(Platform::LinkedIn, SecretString::new("abc".into()));
        assert!(creds.has_token(Platform::LinkedIn));
        assert_eq!(creds.token(Platform::LinkedIn).expose_secret(), "abc");
        assert!(!creds.has_token(Platform::Bluesky));
    }
}
