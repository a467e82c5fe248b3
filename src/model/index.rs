use serde_json::Value;

/// Index names from a `/book-indexes` payload; anything but an array of
/// strings under `indexes` counts as no indexes.
pub fn index_names(listing: &Value) -> Vec<String> {
    listing
        .get("indexes")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_index_names() {
        let listing = json!({ "indexes": ["moby-dick", "the-republic"] });
        assert_eq!(index_names(&listing), vec!["moby-dick", "the-republic"]);
    }

    #[test]
    fn missing_or_malformed_listing_is_empty() {
        assert!(index_names(&json!({})).is_empty());
        assert!(index_names(&json!({ "indexes": null })).is_empty());
        assert!(index_names(&json!("moby-dick")).is_empty());
    }
}
