use serde_json::{json, Map, Value};

/// Cut `s` to at most `max_len` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}…", &s[..idx]),
    }
}

/// Tool-call arguments arrive as JSON text; anything unparsable becomes `{}`.
pub fn parse_arguments(arguments: &str) -> Value {
    if arguments.trim().is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(arguments).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Gemini wants a JSON object as function response. Plain text and non-object
/// JSON are wrapped under `result`.
pub fn tool_result_payload(content: &str) -> Value {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Value::Object(map),
        Ok(other) => json!({ "result": other }),
        Err(_) => json!({ "result": content }),
    }
}

/// Recover the function name from an id minted as `<name>_<ordinal>`.
/// Ids of any other shape fall back to the text before the first `_`.
pub fn function_name_from_call_id(tool_call_id: &str) -> String {
    if let Some((name, ordinal)) = tool_call_id.rsplit_once('_') {
        if !name.is_empty() && !ordinal.is_empty() && ordinal.bytes().all(|b| b.is_ascii_digit()) {
            return name.to_string();
        }
    }
    match tool_call_id.split_once('_') {
        Some((prefix, _)) if !prefix.is_empty() => prefix.to_string(),
        _ => tool_call_id.to_string(),
    }
}
