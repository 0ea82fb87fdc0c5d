use serde_json::{Map, Value};

use crate::json::{nonblank, string_field};

const NAME_VARIANT_PREFIX: &str = "product_name_";

/// `code` (trimmed string, then number), falling back to a string `_id`
pub(super) fn barcode(record: &Map<String, Value>) -> Option<String> {
    match record.get("code") {
        Some(Value::String(code)) => {
            if let Some(code) = nonblank(code) {
                return Some(code.to_string());
            }
        }
        Some(Value::Number(code)) => return Some(code.to_string()),
        _ => {}
    }

    // `_id` is taken as-is, untrimmed
    string_field(record, "_id").map(str::to_string)
}

/// `brand_owner`, else the first comma-separated token of `brands`
pub(super) fn brand(record: &Map<String, Value>) -> Option<String> {
    if let Some(owner) = string_field(record, "brand_owner").and_then(nonblank) {
        return Some(owner.to_string());
    }

    string_field(record, "brands")
        .and_then(|brands| brands.split(',').next())
        .and_then(nonblank)
        .map(str::to_string)
}

/// `product_name`, else the first non-blank `product_name_*` variant
///
/// Variants are scanned in the record's own key order. With several language
/// variants and no base name, whichever comes first in the source wins.
pub(super) fn name(record: &Map<String, Value>) -> Option<String> {
    if let Some(name) = string_field(record, "product_name").and_then(nonblank) {
        return Some(name.to_string());
    }

    record
        .iter()
        .filter(|(key, _)| key.starts_with(NAME_VARIANT_PREFIX))
        .find_map(|(_, value)| value.as_str().and_then(nonblank))
        .map(str::to_string)
}
