//! Projection of OFF-style product records
//!
//! Extracts a fixed, normalized subset of fields from each record. Extraction
//! is tolerant: a field with an unexpected shape degrades to its absent or
//! empty value and never aborts the rest of the record.

mod fields;
mod images;
mod ingredients;
mod projector;
mod types;

pub use projector::{DEFAULT_IMAGE_LANGUAGE, Projector, extract_projection};
pub use types::{ImageRef, IngredientNode, Projection};
