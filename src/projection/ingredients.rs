use serde_json::{Map, Value};

use super::types::IngredientNode;
use crate::json::{nonempty_array_field, string_field};

/// Map every object element of `items`; anything else is dropped
pub(super) fn map_nodes(items: &[Value]) -> Vec<IngredientNode> {
    items
        .iter()
        .filter_map(Value::as_object)
        .map(map_node)
        .collect()
}

/// Recursive; depth is bounded only by the input.
fn map_node(node: &Map<String, Value>) -> IngredientNode {
    IngredientNode {
        name: string_field(node, "text").map(str::to_string),
        vegan: node.get("vegan").cloned(),
        vegetarian: node.get("vegetarian").cloned(),
        ingredients: nonempty_array_field(node, "ingredients")
            .map(map_nodes)
            .unwrap_or_default(),
    }
}
