use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeminiFinishReason {
    FinishReasonUnspecified,
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Language,
    Other,
    Blocklist,
    ProhibitedContent,
    Spii,
    MalformedFunctionCall,
    ImageSafety,
    UnexpectedToolCall,
    TooManyToolCalls,
    #[serde(other)]
    Unrecognized,
}

impl GeminiFinishReason {
    /// True for reasons that mean the model did not end its turn on its own.
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, GeminiFinishReason::Stop | GeminiFinishReason::FinishReasonUnspecified)
    }
}
