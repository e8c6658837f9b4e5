use serde::{Deserialize, Serialize};

use crate::converters::gemini::{GeminiCandidate, GeminiUsage};

/// One `data:` payload of a `streamGenerateContent?alt=sse` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiStreamChunk {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<GeminiUsage>,
    #[serde(rename = "modelVersion")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "responseId")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::gemini::{GeminiFinishReason, GeminiPart};

    #[test]
    fn test_parse_json_str() {
        let text = "{\"candidates\": [{\"content\": {\"parts\": [{\"functionCall\": {\"name\": \"schedule_meeting\",\"args\": {\"attendees\": [\"Bob\",\"Alice\"],\"date\": \"2025-03-27\",\"topic\": \"Q3 planning\",\"time\": \"10:00\"}},\"thoughtSignature\": \"thoughtSignature value\"}],\"role\": \"model\"},\"finishReason\": \"STOP\",\"index\": 0}],\"usageMetadata\": {\"promptTokenCount\": 165,\"candidatesTokenCount\": 49,\"totalTokenCount\": 562,\"promptTokensDetails\": [{\"modality\": \"TEXT\",\"tokenCount\": 165}],\"thoughtsTokenCount\": 348},\"modelVersion\": \"gemini-2.5-pro\",\"responseId\": \"iJDOaOzkBM70jMcPxJmmyAw\"}";
        let chunk = serde_json::from_str::<GeminiStreamChunk>(text).unwrap();
        let candidate = &chunk.candidates[0];
        assert_eq!(candidate.finish_reason, Some(GeminiFinishReason::Stop));
        let content = candidate.content.as_ref().unwrap();
        assert!(matches!(content.parts[0], GeminiPart::FunctionCall { .. }));
        assert_eq!(content.parts[0].thought_signature(), Some("thoughtSignature value"));
        assert_eq!(chunk.usage_metadata.unwrap().total_token_count, Some(562));
    }

    #[test]
    fn test_usage_only_chunk() {
        let text = r#"{"usageMetadata": {"promptTokenCount": 3, "totalTokenCount": 3}}"#;
        let chunk = serde_json::from_str::<GeminiStreamChunk>(text).unwrap();
        assert!(chunk.candidates.is_empty());
        assert_eq!(chunk.usage_metadata.unwrap().candidates_token_count, None);
    }
}
