use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::gemini::{GeminiPart, GeminiStreamChunk};
use super::openai::{OpenAIToolCall, OpenAIUsage};
use super::stream_event::{Completion, FinishReason, StreamEvent};

/// Turns Gemini stream chunks into normalized events for a single turn.
///
/// Feed every `data:` payload in order, then call [`StreamTranslator::finish`]
/// once the transport closes. Not reusable across turns.
#[derive(Debug, Default)]
pub struct StreamTranslator {
    text: String,
    tool_calls: Vec<OpenAIToolCall>,
    usage: Option<OpenAIUsage>,
    message_signature: Option<String>,
    seen_signatures: HashSet<String>,
}

impl StreamTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one SSE `data:` payload. Payloads that are not a JSON chunk yield nothing.
    pub fn process_data(&mut self, data: &str) -> Vec<StreamEvent> {
        let data = data.trim();
        if data.is_empty() || data == "[DONE]" {
            return vec![];
        }
        match serde_json::from_str::<GeminiStreamChunk>(data) {
            Ok(chunk) => self.process_chunk(chunk),
            Err(e) => {
                debug!("Skipping undecodable stream chunk ({}): {:?}", e, data);
                vec![]
            }
        }
    }

    pub fn process_chunk(&mut self, chunk: GeminiStreamChunk) -> Vec<StreamEvent> {
        let mut events = Vec::new();

        for candidate in chunk.candidates.into_iter() {
            if let Some(reason) = candidate.finish_reason {
                if reason.is_abnormal() {
                    warn!("Gemini finished with reason {:?}", reason);
                }
            }
            let Some(content) = candidate.content else { continue };
            let content_signature = content.thought_signature;

            for part in content.parts.into_iter() {
                let part_signature = part.thought_signature().map(str::to_string);
                match part {
                    GeminiPart::Text { text, thought, .. } => {
                        if let Some(sig) = part_signature {
                            self.capture(sig);
                        }
                        if thought == Some(true) {
                            debug!("Skipping thought text ({} chars)", text.len());
                            continue;
                        }
                        if text.is_empty() {
                            continue;
                        }
                        self.text.push_str(&text);
                        events.push(StreamEvent::Content { content: text });
                    }
                    GeminiPart::FunctionCall { function_call, .. } => {
                        let name = function_call.name;
                        let id = format!("{}_{}", name, self.tool_calls.len());
                        let arguments = serde_json::to_string(&function_call.args)
                            .unwrap_or_else(|_| "{}".to_string());

                        let signature = match part_signature {
                            Some(sig) => {
                                self.capture(sig.clone());
                                Some(sig)
                            }
                            // content-level signatures only go to the first call that sees them
                            None => match content_signature.as_ref() {
                                Some(sig) if !self.seen_signatures.contains(sig) => {
                                    self.capture(sig.clone());
                                    Some(sig.clone())
                                }
                                _ => None,
                            },
                        };
                        if signature.is_some() {
                            info!("Captured thought_signature for {}", name);
                        }

                        let tool_call = OpenAIToolCall::new(id, name, arguments).with_thought_signature(signature);
                        self.tool_calls.push(tool_call.clone());
                        events.push(StreamEvent::ToolCall { tool_call });
                    }
                    other => {
                        debug!("Ignoring unsupported response part: {:?}", other);
                        if let Some(sig) = part_signature {
                            self.capture(sig);
                        }
                    }
                }
            }

            if let Some(sig) = content_signature {
                self.capture(sig);
            }
        }

        if let Some(usage) = chunk.usage_metadata.as_ref() {
            let usage = OpenAIUsage::from(usage);
            self.usage = Some(usage);
            events.push(StreamEvent::Usage { usage });
        }

        events
    }

    /// The terminal `complete` event for everything seen so far.
    pub fn finish(self) -> StreamEvent {
        let finish_reason = if self.tool_calls.is_empty() { FinishReason::Stop } else { FinishReason::ToolCalls };
        StreamEvent::Complete(Completion {
            content: self.text,
            tool_calls: self.tool_calls,
            usage: self.usage,
            finish_reason,
            thought_signature: self.message_signature,
        })
    }

    fn capture(&mut self, signature: String) {
        if self.seen_signatures.insert(signature.clone()) {
            self.message_signature = Some(signature);
        }
    }
}
