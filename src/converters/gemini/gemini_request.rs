use crate::converters::helpers::{parse_arguments, tool_result_payload};
use crate::converters::openai::{OpenAIContent, OpenAIMessage, OpenAITool, OpenAIToolCall};
use crate::converters::signature_ledger::SignatureLedger;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::converters::gemini::{
    gemini_content::{GeminiContent, GeminiRole},
    gemini_function_call::GeminiFunctionCall,
    gemini_function_declaration::GeminiFunctionDeclaration,
    gemini_function_response::GeminiFunctionResponse,
    gemini_generation_config::GeminiGenerationConfig,
    gemini_part::GeminiPart,
    gemini_tool::GeminiTool,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GeminiTool>>,
    #[serde(rename = "generationConfig")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

/// A request body plus the signatures gathered while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedRequest {
    pub body: GeminiRequest,
    pub signatures: SignatureLedger,
}

/// Map an OpenAI-style conversation and tool list onto a `streamGenerateContent` body.
///
/// Only the first system message becomes `systemInstruction`. Every thought signature
/// attached to an assistant tool call is echoed on the matching function response,
/// whether the tool message names the function or only carries the call id.
pub fn translate_request(
    messages: &[OpenAIMessage],
    tools: &[OpenAITool],
    generation_config: GeminiGenerationConfig,
) -> TranslatedRequest {
    let mut signatures = SignatureLedger::new();
    let mut contents: Vec<GeminiContent> = Vec::new();

    let system_instruction = messages
        .iter()
        .find_map(|msg| match msg {
            OpenAIMessage::System { content } => {
                Some(content.as_ref().map(|c| c.joined_text(" ")).unwrap_or_default())
            }
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .map(GeminiContent::instruction);

    for msg in messages.iter() {
        let content = match msg {
            OpenAIMessage::System { .. } => continue,
            OpenAIMessage::User { content } => {
                GeminiContent::new(GeminiRole::User, text_parts(content.as_ref()))
            }
            OpenAIMessage::Assistant { content, tool_calls, thought_signature } => model_content(
                content.as_ref(),
                tool_calls,
                thought_signature.as_deref(),
                &mut signatures,
            ),
            OpenAIMessage::Tool { content, tool_call_id, function_name, thought_signature } => {
                function_content(
                    content.as_ref(),
                    tool_call_id,
                    function_name.as_deref(),
                    thought_signature.as_deref(),
                    &signatures,
                )
            }
        };

        if content.parts.is_empty() {
            debug!("Dropping {} turn without parts", msg.role());
            continue;
        }
        contents.push(content);
    }

    let declarations: Vec<GeminiFunctionDeclaration> = tools
        .iter()
        .filter(|t| {
            if !t.is_function() {
                debug!("Skipping unsupported tool type: {}", t.r#type);
            }
            t.is_function()
        })
        .map(|t| GeminiFunctionDeclaration {
            name: t.function.name.clone(),
            description: t.function.description.clone(),
            parameters: t.function.parameters.clone(),
        })
        .collect();
    let tools = if declarations.is_empty() {
        None
    } else {
        Some(vec![GeminiTool { function_declarations: declarations }])
    };

    let generation_config = if generation_config.is_empty() { None } else { Some(generation_config) };

    TranslatedRequest {
        body: GeminiRequest { contents, system_instruction, tools, generation_config },
        signatures,
    }
}

fn text_parts(content: Option<&OpenAIContent>) -> Vec<GeminiPart> {
    match content.map(OpenAIContent::text) {
        Some(text) if !text.is_empty() => vec![GeminiPart::text(text)],
        _ => Vec::new(),
    }
}

fn model_content(
    content: Option<&OpenAIContent>,
    tool_calls: &[OpenAIToolCall],
    message_signature: Option<&str>,
    signatures: &mut SignatureLedger,
) -> GeminiContent {
    let mut parts = text_parts(content);
    // A message-level signature belongs to the first call that lacks its own
    let mut unclaimed = message_signature;

    for tc in tool_calls.iter() {
        let signature = match tc.thought_signature.as_deref() {
            Some(sig) => Some(sig),
            None => unclaimed.take(),
        };
        signatures.record_call(&tc.id, &tc.function.name, signature);
        parts.push(GeminiPart::FunctionCall {
            function_call: GeminiFunctionCall {
                name: tc.function.name.clone(),
                args: parse_arguments(&tc.function.arguments),
                id: None,
                thought_signature: None,
            },
            thought_signature: signature.map(str::to_string),
        });
    }

    // Otherwise it rides on the text part, or on an empty trailing text part
    // when every call already carries its own signature.
    if let Some(sig) = unclaimed {
        let text_part = parts.iter_mut().rev().find(|p| matches!(p, GeminiPart::Text { .. }));
        match text_part {
            Some(part) => part.set_thought_signature(sig.to_string()),
            None if !tool_calls.is_empty() => {
                let mut part = GeminiPart::text(String::new());
                part.set_thought_signature(sig.to_string());
                parts.push(part);
            }
            None => {}
        }
    }

    GeminiContent::new(GeminiRole::Model, parts)
}

fn function_content(
    content: Option<&OpenAIContent>,
    tool_call_id: &str,
    function_name: Option<&str>,
    own_signature: Option<&str>,
    signatures: &SignatureLedger,
) -> GeminiContent {
    let name = signatures.resolve_function_name(tool_call_id, function_name);
    let response = content
        .map(|c| tool_result_payload(&c.text()))
        .unwrap_or_else(|| Value::Object(Map::new()));

    let thought_signature = own_signature
        .or_else(|| signatures.signature_for(tool_call_id, &name))
        .map(str::to_string);
    if thought_signature.is_some() {
        debug!("Including thought_signature in function response for {}", name);
    }

    GeminiContent::new(
        GeminiRole::Function,
        vec![GeminiPart::FunctionResponse {
            function_response: GeminiFunctionResponse { name, response },
            thought_signature,
        }],
    )
}
