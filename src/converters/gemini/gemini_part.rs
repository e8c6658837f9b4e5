use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::converters::gemini::gemini_function_call::GeminiFunctionCall;
use crate::converters::gemini::gemini_function_response::GeminiFunctionResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiPart {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
        #[serde(rename = "thoughtSignature")]
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_signature: Option<String>,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: GeminiFunctionCall,
        #[serde(rename = "thoughtSignature")]
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_signature: Option<String>,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: GeminiFunctionResponse,
        #[serde(rename = "thoughtSignature")]
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_signature: Option<String>,
    },
    // inlineData, executableCode and friends are never produced here; keep them opaque
    Other(Value),
}

impl GeminiPart {
    pub fn text(text: String) -> Self {
        GeminiPart::Text { text, thought: None, thought_signature: None }
    }

    /// Signature carried by this part, including the nested `functionCall` form
    /// some Gemini builds emit.
    pub fn thought_signature(&self) -> Option<&str> {
        match self {
            GeminiPart::Text { thought_signature, .. } => thought_signature.as_deref(),
            GeminiPart::FunctionCall { function_call, thought_signature } => thought_signature
                .as_deref()
                .or(function_call.thought_signature.as_deref()),
            GeminiPart::FunctionResponse { thought_signature, .. } => thought_signature.as_deref(),
            GeminiPart::Other(value) => value.get("thoughtSignature").and_then(Value::as_str),
        }
    }

    pub fn set_thought_signature(&mut self, signature: String) {
        match self {
            GeminiPart::Text { thought_signature, .. }
            | GeminiPart::FunctionCall { thought_signature, .. }
            | GeminiPart::FunctionResponse { thought_signature, .. } => {
                *thought_signature = Some(signature);
            }
            GeminiPart::Other(Value::Object(map)) => {
                map.insert("thoughtSignature".to_string(), Value::String(signature));
            }
            GeminiPart::Other(_) => {}
        }
    }
}
