//! Stats module for estimating projected payload sizes
//!
//! Streams records through the projector once and keeps only running
//! counters, so memory use does not grow with the input.

mod aggregator;
mod types;

// Re-export public types
pub use aggregator::{Aggregator, DEFAULT_PROGRESS_INTERVAL, run};
pub use types::{FieldTotals, NonemptyCounts, ProjectionStats};
