use serde_json::Value;

use super::types::Projection;
use super::{fields, images, ingredients};
use crate::json::nonempty_array_field;

/// Language whose display URL is preferred when a record offers several
pub const DEFAULT_IMAGE_LANGUAGE: &str = "en";

/// Extracts a [`Projection`] from one parsed record
#[derive(Debug, Clone)]
pub struct Projector {
    image_language: String,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_LANGUAGE)
    }
}

impl Projector {
    pub fn new(image_language: impl Into<String>) -> Self {
        Self {
            image_language: image_language.into(),
        }
    }

    pub fn image_language(&self) -> &str {
        &self.image_language
    }

    /// Project one record. Never fails; a record that is not a JSON object
    /// yields the empty projection.
    pub fn project(&self, record: &Value) -> Projection {
        let Some(record) = record.as_object() else {
            return Projection::default();
        };

        Projection {
            barcode: fields::barcode(record),
            brand: fields::brand(record),
            name: fields::name(record),
            ingredients: nonempty_array_field(record, "ingredients")
                .map(ingredients::map_nodes)
                .unwrap_or_default(),
            images: images::display_urls(record.get("selected_images"), &self.image_language),
        }
    }
}

/// Project `record` with the default projector
///
/// # Examples
/// ```
/// use off_estimator::projection::extract_projection;
/// use serde_json::json;
///
/// let projection = extract_projection(&json!({"code": "123", "brands": "Acme,Co"}));
/// assert_eq!(projection.barcode.as_deref(), Some("123"));
/// assert_eq!(projection.brand.as_deref(), Some("Acme"));
/// ```
pub fn extract_projection(record: &Value) -> Projection {
    Projector::default().project(record)
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod projector_tests;
