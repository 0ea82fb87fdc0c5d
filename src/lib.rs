//! off-estimator library - projected payload size estimation for OFF exports
//!
//! This library exposes the projector, the streaming aggregator and the
//! gzipped line source used by the `off-estimator` binary.

pub mod config;
pub mod error;
pub mod input;
pub mod json;
pub mod output;
pub mod projection;
pub mod stats;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::EstimatorError;
pub use projection::{Projection, Projector, extract_projection};
pub use stats::{Aggregator, ProjectionStats};
