//! Outbox publisher: records approved posts to a JSONL file instead of sending them.

use async_trait::async_trait;
use news_curator_domain::{Credentials, Platform, PublishError, PublishReceipt, Publisher};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum OutboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct OutboxWriter {
    path: PathBuf,
    file: Arc<Mutex<tokio::fs::File>>,
}

impl OutboxWriter {
    pub async fn new(path: PathBuf) -> Result<Self, OutboxError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            file: Arc::new(Mutex::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&self, entry: &OutboxEntry<'_>) -> Result<(), OutboxError> {
        let line = serde_json::to_string(entry)?;
        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct OutboxPublisher {
    writer: OutboxWriter,
}

impl OutboxPublisher {
    pub fn new(writer: OutboxWriter) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct OutboxEntry<'a> {
    id: Uuid,
    platform: Platform,
    text: &'a str,
    has_credential: bool,
    #[serde(with = "time::serde::rfc3339")]
    recorded_at: OffsetDateTime,
}

#[async_trait]
impl Publisher for OutboxPublisher {
    async fn publish(
        &self,
        text: &str,
        platform: Platform,
        credentials: &Credentials,
    ) -> Result<PublishReceipt, PublishError> {
        let entry = OutboxEntry {
            id: Uuid::new_v4(),
            platform,
            text,
            has_credential: credentials.has_token(platform),
            recorded_at: OffsetDateTime::now_utc(),
        };

        self.writer
            .append(&entry)
            .await
            .map_err(|error| PublishError::Api(format!("Outbox write failed: {}", error)))?;

        Ok(PublishReceipt::accepted(
            platform,
            format!("queued in {}", self.writer.path().display()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use serde_json::Value;
    use tempfile::TempDir;

    #[tokio::test]
    async fn outbox_publisher_writes_jsonl_entry() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("outbox.jsonl");

        let writer = OutboxWriter::new(path.clone()).await.expect("writer");
        let publisher = OutboxPublisher::new(writer);
        let credentials =
            Credentials::new().with_token(Platform::Bluesky, SecretString::new("tok".into()));

        let receipt = publisher
            .publish("Title\nhttps://example.com", Platform::Bluesky, &credentials)
            .await
            .expect("publish");
        assert!(receipt.accepted);

        let contents = tokio::fs::read_to_string(&path).await.expect("read outbox");
        let line = contents.trim();
        let value: Value = serde_json::from_str(line).expect("valid json");

        assert_eq!(value["platform"], "bluesky");
        assert_eq!(value["text"], "Title\nhttps://example.com");
        assert_eq!(value["has_credential"], true);
        assert!(value["recorded_at"].is_string());
        assert!(!contents.contains("tok\""));
    }

    #[tokio::test]
    async fn outbox_appends_one_line_per_post() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("outbox.jsonl");

        let writer = OutboxWriter::new(path.clone()).await.expect("writer");
        let publisher = OutboxPublisher::new(writer);

        for platform in Platform::ALL {
            publisher
                .publish("post", platform, &Credentials::new())
                .await
                .expect("publish");
        }

        let contents = tokio::fs::read_to_string(&path).await.expect("read outbox");
        assert_eq!(contents.lines().count(), 3);
    }
}
