use crate::converters::openai::{OpenAIMessage, OpenAITool};
use serde::{Deserialize, Serialize};

/// An OpenAI chat-completions request body, as the command line reads it from disk.
/// Only the fields the Gemini adapter understands are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<OpenAIMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<OpenAITool>>,
}

impl OpenAIRequest {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let request: OpenAIRequest = serde_json::from_str(&content)?;
        Ok(request)
    }

    pub fn tools(&self) -> &[OpenAITool] {
        self.tools.as_deref().unwrap_or_default()
    }
}
