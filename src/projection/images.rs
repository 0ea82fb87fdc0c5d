use serde_json::{Map, Value};

use super::types::ImageRef;
use crate::json::{object_field, string_field};

/// Collect one display URL per selected image
///
/// `selected_images` maps image ids to descriptors. Each descriptor with a
/// `display` object contributes its `language` URL when that is a string, or
/// else the first string value under `display`. Descriptors of any other shape
/// contribute nothing; URLs gathered before them are kept.
pub(super) fn display_urls(selected_images: Option<&Value>, language: &str) -> Vec<ImageRef> {
    let Some(Value::Object(images)) = selected_images else {
        return Vec::new();
    };

    images
        .values()
        .filter_map(Value::as_object)
        .filter_map(|descriptor| object_field(descriptor, "display"))
        .filter_map(|display| pick_display_url(display, language))
        .map(ImageRef::new)
        .collect()
}

fn pick_display_url<'a>(display: &'a Map<String, Value>, language: &str) -> Option<&'a str> {
    string_field(display, language).or_else(|| display.values().find_map(Value::as_str))
}
