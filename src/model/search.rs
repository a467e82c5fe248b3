use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::model::personality::DEFAULT_PERSONALITY;

pub const DEFAULT_LIMIT: u32 = 5;
pub const UNKNOWN_TITLE: &str = "Unknown";
pub const NO_RESPONSE: &str = "No response available";

/// Body accepted by `POST /api/chat`. Every field is optional on the wire so
/// that a missing query can be reported as a validation error rather than a
/// decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, rename = "indexName", alias = "index_name")]
    pub index_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<u32>,
    #[serde(default)]
    pub personality: Option<String>,
}

impl ChatRequest {
    /// Returns `None` when the query is absent or empty. Whitespace is left
    /// for the backend to judge.
    pub fn into_query(self) -> Option<SearchQuery> {
        let text = self.query.filter(|q| !q.is_empty())?;
        Some(SearchQuery {
            text,
            index_name: self.index_name.filter(|name| !name.is_empty()),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            personality: self
                .personality
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PERSONALITY.to_string()),
        })
    }
}

/// Accepts `limit` as a whole number, an integral float such as `5.0`, or a
/// numeric string such as `"3"`.
fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let limit = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
    };

    limit
        .and_then(|l| u32::try_from(l).ok())
        .map(Some)
        .ok_or_else(|| D::Error::custom("limit must be a whole number"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub index_name: Option<String>,
    pub limit: u32,
    pub personality: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            index_name: None,
            limit: DEFAULT_LIMIT,
            personality: DEFAULT_PERSONALITY.to_string(),
        }
    }

    /// Query string sent to the backend's `/search-books`.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", self.text.clone())];
        if let Some(index_name) = &self.index_name {
            params.push(("index_name", index_name.clone()));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("personality", self.personality.clone()));
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    /// Kept as the backend's number, integral or not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub text: String,
    pub metadata: BookMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub results: Vec<SearchResultItem>,
    pub response: String,
    pub indexes_searched: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reshape a `/search-books` payload so that every field the UI reads exists.
///
/// | field                        | taken from                       | default                   |
/// |------------------------------|----------------------------------|---------------------------|
/// | `results`                    | `results` if an array            | `[]`                      |
/// | `results[].text`             | non-empty `text`                 | `""`                      |
/// | `results[].metadata.title`   | non-empty `metadata.title`       | `"Unknown"`               |
/// | `results[].metadata.chapter` | `metadata.chapter`               | absent                    |
/// | `results[].metadata.page`    | numeric `metadata.page`          | absent                    |
/// | `response`                   | `response`, then `message`       | `"No response available"` |
/// | `indexes_searched`           | strings in `indexes_searched`    | `[]`                      |
/// | `message`                    | `message`                        | absent                    |
///
/// Any shape is accepted; a payload that is not an object yields all defaults.
pub fn normalize_search_response(raw: &Value) -> ChatResponse {
    let results = raw
        .get("results")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize_result).collect())
        .unwrap_or_default();

    let response = non_empty_str(raw.get("response"))
        .or_else(|| non_empty_str(raw.get("message")))
        .unwrap_or(NO_RESPONSE)
        .to_string();

    let indexes_searched = raw
        .get("indexes_searched")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    ChatResponse {
        results,
        response,
        indexes_searched,
        message: raw.get("message").and_then(Value::as_str).map(str::to_owned),
    }
}

fn normalize_result(item: &Value) -> SearchResultItem {
    let metadata = item.get("metadata");
    let field = |name: &str| metadata.and_then(|m| m.get(name));

    SearchResultItem {
        text: non_empty_str(item.get("text")).unwrap_or_default().to_string(),
        metadata: BookMetadata {
            title: non_empty_str(field("title"))
                .unwrap_or(UNKNOWN_TITLE)
                .to_string(),
            chapter: field("chapter").and_then(chapter_label),
            page: field("page").and_then(page_number),
        },
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn page_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}

// Some indexers number chapters instead of naming them.
fn chapter_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_query_yields_no_search() {
        assert!(ChatRequest::default().into_query().is_none());

        let empty = ChatRequest {
            query: Some(String::new()),
            ..Default::default()
        };
        assert!(empty.into_query().is_none());
    }

    #[test]
    fn whitespace_query_is_forwarded() {
        let blank = ChatRequest {
            query: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(blank.into_query().map(|q| q.text), Some("   ".to_string()));
    }

    #[test]
    fn limit_accepts_numeric_strings_and_integral_floats() {
        for (limit, expected) in [(json!("3"), 3), (json!(5.0), 5), (json!(7), 7)] {
            let request: ChatRequest =
                serde_json::from_value(json!({ "query": "whales", "limit": limit })).unwrap();
            assert_eq!(request.limit, Some(expected));
        }

        let request: ChatRequest =
            serde_json::from_value(json!({ "query": "whales", "limit": null })).unwrap();
        assert_eq!(request.into_query().map(|q| q.limit), Some(DEFAULT_LIMIT));
    }

    #[test]
    fn limit_rejects_non_numbers() {
        for limit in [json!("five"), json!(2.5), json!(-1), json!([5])] {
            let result = serde_json::from_value::<ChatRequest>(json!({ "limit": limit }));
            assert!(result.is_err());
        }
    }

    #[test]
    fn request_defaults_are_applied() {
        let request: ChatRequest =
            serde_json::from_value(json!({ "query": "What is justice?" })).unwrap();
        let query = request.into_query().unwrap();

        assert_eq!(query, SearchQuery::new("What is justice?"));
        assert_eq!(query.limit, 5);
        assert_eq!(query.personality, "classic_literature");
    }

    #[test]
    fn request_accepts_camel_case_index_name() {
        let request: ChatRequest = serde_json::from_value(json!({
            "query": "whales",
            "indexName": "moby-dick",
            "limit": 3,
            "personality": "critic",
        }))
        .unwrap();
        let query = request.into_query().unwrap();

        assert_eq!(query.index_name.as_deref(), Some("moby-dick"));
        assert_eq!(
            query.query_params(),
            vec![
                ("query", "whales".to_string()),
                ("index_name", "moby-dick".to_string()),
                ("limit", "3".to_string()),
                ("personality", "critic".to_string()),
            ]
        );
    }

    #[test]
    fn empty_index_name_is_not_forwarded() {
        let request = ChatRequest {
            query: Some("whales".into()),
            index_name: Some(String::new()),
            ..Default::default()
        };
        let params = request.into_query().unwrap().query_params();

        assert!(params.iter().all(|(key, _)| *key != "index_name"));
    }

    #[test]
    fn results_default_to_empty_when_not_an_array() {
        let cases = [
            json!({}),
            json!({ "results": null }),
            json!({ "results": "oops" }),
            json!([1, 2]),
        ];
        for raw in cases {
            let normalized = normalize_search_response(&raw);
            assert!(normalized.results.is_empty(), "{raw}");
            assert!(normalized.indexes_searched.is_empty(), "{raw}");
        }
    }

    #[test]
    fn missing_title_and_text_get_placeholders() {
        let raw = json!({
            "results": [
                {},
                { "text": "", "metadata": { "title": "" } },
                { "text": "Call me Ishmael.", "metadata": { "chapter": 1 } },
            ]
        });
        let normalized = normalize_search_response(&raw);

        assert_eq!(normalized.results.len(), 3);
        for item in &normalized.results {
            assert_eq!(item.metadata.title, UNKNOWN_TITLE);
        }
        assert_eq!(normalized.results[0].text, "");
        assert_eq!(normalized.results[2].metadata.chapter.as_deref(), Some("1"));
    }

    #[test]
    fn narrative_falls_back_from_response_to_message() {
        let with_message = normalize_search_response(&json!({ "message": "No matches" }));
        assert_eq!(with_message.response, "No matches");
        assert_eq!(with_message.message.as_deref(), Some("No matches"));

        let with_nothing = normalize_search_response(&json!({ "results": [] }));
        assert_eq!(with_nothing.response, NO_RESPONSE);
        assert_eq!(with_nothing.message, None);
    }

    #[test]
    fn well_formed_payload_passes_through() {
        let raw = json!({
            "results": [{
                "text": "Justice is the advantage of the stronger.",
                "metadata": { "title": "The Republic", "chapter": "Book I", "page": 12 }
            }],
            "response": "Justice is...",
            "indexes_searched": ["plato", "aristotle"],
            "message": "2 indexes searched",
        });
        let normalized = normalize_search_response(&raw);

        assert_eq!(serde_json::to_value(&normalized).unwrap(), raw);
    }

    #[test]
    fn republic_scenario_keeps_page_and_omits_chapter() {
        let raw = json!({
            "results": [{
                "text": "...",
                "metadata": { "title": "The Republic", "page": 12 }
            }],
            "response": "Justice is..."
        });
        let normalized = normalize_search_response(&raw);
        let item = &normalized.results[0];

        assert_eq!(item.text, "...");
        assert_eq!(item.metadata.title, "The Republic");
        assert_eq!(item.metadata.chapter, None);
        assert_eq!(item.metadata.page.as_ref().and_then(Number::as_u64), Some(12));
        assert_eq!(normalized.response, "Justice is...");

        let wire = serde_json::to_value(item).unwrap();
        assert!(wire["metadata"].get("chapter").is_none());
    }

    #[test]
    fn fractional_and_negative_pages_are_kept() {
        let raw = json!({
            "results": [
                { "text": "t", "metadata": { "title": "T", "page": 12.0 } },
                { "text": "t", "metadata": { "title": "T", "page": -3 } },
                { "text": "t", "metadata": { "title": "T", "page": "xii" } },
            ],
            "response": "r",
            "indexes_searched": [],
        });
        let normalized = normalize_search_response(&raw);
        let pages: Vec<_> = normalized.results.iter().map(|r| r.metadata.page.clone()).collect();

        assert_eq!(pages[0].as_ref().and_then(Number::as_f64), Some(12.0));
        assert_eq!(pages[1].as_ref().and_then(Number::as_i64), Some(-3));
        assert_eq!(pages[2], None);

        let wire = serde_json::to_value(&normalized).unwrap();
        assert_eq!(wire["results"][0], raw["results"][0]);
        assert_eq!(wire["results"][1], raw["results"][1]);
    }
}
