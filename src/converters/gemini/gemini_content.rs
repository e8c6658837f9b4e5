use crate::converters::gemini::GeminiPart;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeminiRole {
    User,
    Model,
    Function,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<GeminiRole>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
    // Some model turns carry the signature on the content instead of a part
    #[serde(rename = "thoughtSignature")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_signature: Option<String>,
}

impl GeminiContent {
    pub fn new(role: GeminiRole, parts: Vec<GeminiPart>) -> Self {
        Self { role: Some(role), parts, thought_signature: None }
    }

    /// Role-less content holding a single text part, the shape of `systemInstruction`.
    pub fn instruction(text: String) -> Self {
        Self { role: None, parts: vec![GeminiPart::text(text)], thought_signature: None }
    }
}
