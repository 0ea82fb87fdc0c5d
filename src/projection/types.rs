//! Type definitions for projected records

use serde::Serialize;
use serde_json::Value;

/// Normalized subset of one product record
///
/// Field order is the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Projection {
    pub barcode: Option<String>,
    pub brand: Option<String>,
    pub name: Option<String>,
    pub ingredients: Vec<IngredientNode>,
    pub images: Vec<ImageRef>,
}

impl Projection {
    /// Barcode if present and non-empty
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref().filter(|code| !code.is_empty())
    }
}

/// One node of the ingredient tree
///
/// `vegan` and `vegetarian` carry whatever the source holds for the flag
/// (OFF writes `"yes"`, `"no"` or `"maybe"`). Absent flags serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngredientNode {
    pub name: Option<String>,
    pub vegan: Option<Value>,
    pub vegetarian: Option<Value>,
    pub ingredients: Vec<IngredientNode>,
}

/// Display image URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub url: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
