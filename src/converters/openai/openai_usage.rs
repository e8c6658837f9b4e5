use serde::{Deserialize, Serialize};

use crate::converters::gemini::GeminiUsage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl From<&GeminiUsage> for OpenAIUsage {
    fn from(usage: &GeminiUsage) -> Self {
        OpenAIUsage {
            prompt_tokens: usage.prompt_token_count.unwrap_or(0),
            completion_tokens: usage.candidates_token_count.unwrap_or(0),
            total_tokens: usage.total_token_count.unwrap_or(0),
        }
    }
}
