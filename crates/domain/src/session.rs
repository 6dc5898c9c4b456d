//! Session context for the password gate

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect password")]
    InvalidPassword,
    #[error("Session is not authenticated")]
    NotAuthenticated,
    #[error("No application password is configured")]
    SecretNotConfigured,
}

/// A single user session.
///
/// Starts unauthenticated; a successful password check moves it to
/// authenticated for the rest of its life.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check an entered password against the configured secret
    pub fn authenticate(
        &mut self,
        entered: &str,
        secret: &SecretString,
    ) -> Result<(), AuthError> {
        let expected = secret.expose_secret();
        if expected.is_empty() {
            tracing::warn!("Authentication attempted without a configured password");
            return Err(AuthError::SecretNotConfigured);
        }

        if digest(entered) == digest(expected) {
            if !self.authenticated {
                tracing::info!("Session authenticated");
            }
            self.authenticated = true;
            Ok(())
        } else {
            tracing::warn!(
                authenticated = self.authenticated,
                "Password check failed"
            );
            Err(AuthError::InvalidPassword)
        }
    }

    /// Gate for actions that require an authenticated session
    pub fn require(&self) -> Result<(), AuthError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated)
        }
    }
}

fn digest(value: &str) -> Vec<u8> {
    Sha256::digest(value.as_bytes()).to_vec()
}
