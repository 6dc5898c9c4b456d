//! Application use cases / business logic

pub mod fetch;
pub mod generate;
pub mod pipeline;
pub mod rank;
pub mod score;

pub use fetch::{ContentFetcher, FetchConfig, fallback_articles};
pub use generate::{DEFAULT_POST_IMAGE, GenerateConfig, PostGenerator};
pub use pipeline::{Pipeline, PipelineConfig, PipelineError, PipelineRun};
pub use rank::{DEFAULT_TOP_N, rank};
pub use score::{Perturbation, Scorer, ScoringConfig};
