//! Publisher adapters

use async_trait::async_trait;
use news_curator_domain::{Credentials, Platform, PublishError, PublishReceipt, Publisher};

/// Stand-in for real platform integrations.
///
/// Never touches the network and always reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPublisher;

impl SimulatedPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Publisher for SimulatedPublisher {
    async fn publish(
        &self,
        text: &str,
        platform: Platform,
        credentials: &Credentials,
    ) -> Result<PublishReceipt, PublishError> {
        tracing::info!(
            platform = %platform,
            chars = text.chars().count(),
            has_credential = credentials.has_token(platform),
            "Simulated publish"
        );

        Ok(PublishReceipt::accepted(
            platform,
            format!("{} post simulated", platform),
        ))
    }
}
