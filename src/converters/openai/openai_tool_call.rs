use serde::{Deserialize, Serialize};
use crate::converters::openai::openai_tool_call_function::OpenAIToolCallFunction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIToolCall {
    pub id: String,
    #[serde(default = "function_type")]
    pub r#type: String,
    pub function: OpenAIToolCallFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_signature: Option<String>,
}

impl OpenAIToolCall {
    pub fn new(id: String, name: String, arguments: String) -> Self {
        Self {
            id,
            r#type: function_type(),
            function: OpenAIToolCallFunction { name, arguments },
            thought_signature: None,
        }
    }

    pub fn with_thought_signature(mut self, signature: Option<String>) -> Self {
        self.thought_signature = signature;
        self
    }
}

fn function_type() -> String {
    "function".to_string()
}
