use crate::converters::openai::openai_content::OpenAIContent;
use crate::converters::openai::openai_tool_call::OpenAIToolCall;
use serde::{Deserialize, Serialize};

/// One chat turn. Each role only carries the fields that are meaningful for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum OpenAIMessage {
    System {
        #[serde(default)]
        content: Option<OpenAIContent>,
    },
    User {
        #[serde(default)]
        content: Option<OpenAIContent>,
    },
    Assistant {
        #[serde(default)]
        content: Option<OpenAIContent>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tool_calls: Vec<OpenAIToolCall>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_signature: Option<String>,
    },
    Tool {
        #[serde(default)]
        content: Option<OpenAIContent>,
        tool_call_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        function_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_signature: Option<String>,
    },
}

impl OpenAIMessage {
    pub fn system(text: impl Into<String>) -> Self {
        OpenAIMessage::System { content: Some(OpenAIContent::Text(text.into())) }
    }

    pub fn user(text: impl Into<String>) -> Self {
        OpenAIMessage::User { content: Some(OpenAIContent::Text(text.into())) }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        OpenAIMessage::Assistant {
            content: Some(OpenAIContent::Text(text.into())),
            tool_calls: Vec::new(),
            thought_signature: None,
        }
    }

    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        OpenAIMessage::Tool {
            content: Some(OpenAIContent::Text(content.into())),
            tool_call_id: tool_call_id.into(),
            function_name: None,
            thought_signature: None,
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            OpenAIMessage::System { .. } => "system",
            OpenAIMessage::User { .. } => "user",
            OpenAIMessage::Assistant { .. } => "assistant",
            OpenAIMessage::Tool { .. } => "tool",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_assistant_with_tool_calls() {
        let msg: OpenAIMessage = serde_json::from_value(json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "get_state_0",
                "type": "function",
                "function": {"name": "get_state", "arguments": "{\"entity_id\":\"sun.sun\"}"},
                "thought_signature": "sigA"
            }]
        }))
        .unwrap();
        match msg {
            OpenAIMessage::Assistant { content, tool_calls, thought_signature } => {
                assert!(content.is_none());
                assert_eq!(tool_calls.len(), 1);
                assert_eq!(tool_calls[0].thought_signature.as_deref(), Some("sigA"));
                assert!(thought_signature.is_none());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_parse_tool_with_segment_content() {
        let msg: OpenAIMessage = serde_json::from_value(json!({
            "role": "tool",
            "tool_call_id": "get_state_0",
            "content": [{"type": "text", "text": "{\"state\":"}, {"type": "image_url", "image_url": {"url": "x"}}, {"type": "text", "text": "\"on\"}"}]
        }))
        .unwrap();
        match msg {
            OpenAIMessage::Tool { content, tool_call_id, function_name, .. } => {
                assert_eq!(tool_call_id, "get_state_0");
                assert!(function_name.is_none());
                assert_eq!(content.unwrap().text(), "{\"state\":\"on\"}");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_tool_message_requires_call_id() {
        let parsed = serde_json::from_value::<OpenAIMessage>(json!({"role": "tool", "content": "x"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let value = serde_json::to_value(OpenAIMessage::assistant("hi")).unwrap();
        assert_eq!(value, json!({"role": "assistant", "content": "hi"}));
    }
}
