//! news-curator domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Domain entities and value objects
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: The fetch, score, rank, generate and publish pipeline
//! - `policy`: Keyword weights and credible sources
//! - `session`: Password gate
//! - `host`: URL to source-domain normalization

pub mod credentials;
pub mod host;
pub mod model;
pub mod policy;
pub mod ports;
pub mod session;
pub mod usecases;

pub use credentials::Credentials;
pub use host::extract_domain;
pub use model::*;
pub use ports::*;
pub use session::{AuthError, Session};
