use serde_json::Value;
use tracing::warn;

use crate::domain::recipe::entities::RecipeRecord;

fn text_field(item: &Value, field: &str) -> Option<String> {
    item.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Source URL of the first `pagemap.cse_image` entry, if any.
fn first_image(item: &Value) -> Option<String> {
    item.pointer("/pagemap/cse_image/0/src")
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub fn normalize_search_item(item: &Value) -> RecipeRecord {
    RecipeRecord::new(
        text_field(item, "title"),
        text_field(item, "link"),
        text_field(item, "snippet"),
        first_image(item),
    )
}

/// Maps a web-search response into recipe records.
///
/// A response without an `items` array means zero results, not an error.
pub fn normalize_search_response(response: &Value) -> Vec<RecipeRecord> {
    match response.get("items").and_then(Value::as_array) {
        Some(items) => items.iter().map(normalize_search_item).collect(),
        None => {
            warn!("No search results returned by the search service");
            Vec::new()
        }
    }
}
