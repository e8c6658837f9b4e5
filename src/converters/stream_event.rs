use serde::{Deserialize, Serialize};

use crate::converters::helpers::truncate;
use crate::converters::openai::{OpenAIContent, OpenAIMessage, OpenAIToolCall, OpenAIUsage};

/// Longest error text forwarded to the caller.
pub const MAX_ERROR_LEN: usize = 500;

/// Normalized output of one streamed turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    Content { content: String },
    ToolCall { tool_call: OpenAIToolCall },
    Usage { usage: OpenAIUsage },
    Error { error: String },
    Complete(Completion),
}

impl StreamEvent {
    pub fn error(message: impl AsRef<str>) -> Self {
        StreamEvent::Error { error: truncate(message.as_ref(), MAX_ERROR_LEN) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    ToolCalls,
}

/// Everything the model produced in one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub content: String,
    pub tool_calls: Vec<OpenAIToolCall>,
    pub usage: Option<OpenAIUsage>,
    pub finish_reason: FinishReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_signature: Option<String>,
}

impl Completion {
    /// The assistant turn to append to the conversation before the next request.
    ///
    /// Per-call signatures stay on their calls; the turn-level signature is only
    /// kept when no call already carries it.
    pub fn into_assistant_message(self) -> OpenAIMessage {
        let thought_signature = self.thought_signature.filter(|sig| {
            !self
                .tool_calls
                .iter()
                .any(|tc| tc.thought_signature.as_deref() == Some(sig.as_str()))
        });
        OpenAIMessage::Assistant {
            content: if self.content.is_empty() { None } else { Some(OpenAIContent::Text(self.content)) },
            tool_calls: self.tool_calls,
            thought_signature,
        }
    }
}
