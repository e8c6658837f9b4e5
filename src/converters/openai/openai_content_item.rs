use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpenAIContentItem {
    Text { text: String },
    // image_url, input_audio, ...: not forwarded to Gemini
    #[serde(other)]
    Unsupported,
}

impl OpenAIContentItem {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OpenAIContentItem::Text { text } => Some(text),
            OpenAIContentItem::Unsupported => None,
        }
    }
}
