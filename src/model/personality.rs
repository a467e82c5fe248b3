use serde_json::Value;

pub const DEFAULT_PERSONALITY: &str = "classic_literature";

pub const FALLBACK_GREETING: &str = "Welcome to the Book Search! How can I help you today?";

/// Personalities offered in the chat panel, as `(tag, label)`. The backend
/// treats the tag as opaque.
pub const PERSONALITIES: [(&str, &str); 4] = [
    ("classic_literature", "Classic Literature"),
    ("philosopher", "Philosopher"),
    ("storyteller", "Storyteller"),
    ("critic", "Critic"),
];

/// Text shown in the greeting banner for a `/greeting` payload, or the
/// fallback when the call failed.
pub fn greeting_text(payload: Option<&Value>) -> String {
    payload
        .and_then(|p| p.get("response"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_GREETING)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_personality_is_offered() {
        assert!(PERSONALITIES.iter().any(|(tag, _)| *tag == DEFAULT_PERSONALITY));
    }

    #[test]
    fn greeting_uses_response_field() {
        let payload = json!({ "response": "Greetings, reader.", "personality": "critic" });
        assert_eq!(greeting_text(Some(&payload)), "Greetings, reader.");
    }

    #[test]
    fn greeting_falls_back() {
        assert_eq!(greeting_text(None), FALLBACK_GREETING);
        assert_eq!(greeting_text(Some(&json!({ "error": "x" }))), FALLBACK_GREETING);
        assert_eq!(greeting_text(Some(&json!({ "response": "" }))), FALLBACK_GREETING);
    }
}
