//! news-curator adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `news_api`: NewsAPI-compatible article search
//! - `publish`: Simulated platform publisher
//! - `outbox`: JSONL outbox publisher for approved posts

pub mod news_api;
pub mod outbox;
pub mod publish;

pub use news_api::NewsApiSource;
pub use outbox::{OutboxPublisher, OutboxWriter};
pub use publish::SimulatedPublisher;
