use serde::{Deserialize, Serialize};
use crate::converters::openai::openai_content_item::OpenAIContentItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenAIContent {
    Text(String),
    Array(Vec<OpenAIContentItem>),
}

impl OpenAIContent {
    /// Text segments joined with `separator`; non-text segments are dropped.
    pub fn joined_text(&self, separator: &str) -> String {
        match self {
            OpenAIContent::Text(t) => t.clone(),
            OpenAIContent::Array(items) => items
                .iter()
                .filter_map(OpenAIContentItem::as_text)
                .collect::<Vec<_>>()
                .join(separator),
        }
    }

    pub fn text(&self) -> String {
        self.joined_text("")
    }
}

impl From<&str> for OpenAIContent {
    fn from(text: &str) -> Self {
        OpenAIContent::Text(text.to_string())
    }
}

impl From<String> for OpenAIContent {
    fn from(text: String) -> Self {
        OpenAIContent::Text(text)
    }
}
