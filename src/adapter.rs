use std::sync::Arc;

use async_stream::stream;
use futures::{Stream, StreamExt};
use tracing::{debug, warn, Instrument};

use crate::config::Config;
use crate::converters::gemini::{translate_request, GeminiGenerationConfig};
use crate::converters::openai::{OpenAIMessage, OpenAITool};
use crate::converters::response_handler::translate_response_stream;
use crate::converters::stream_event::{Completion, StreamEvent};
use crate::error::AdapterError;
use crate::llm_client::{HttpTransport, Transport};
use crate::request_id::TurnId;

/// Runs OpenAI-shaped conversations against Gemini's native streaming API.
///
/// Holds no per-conversation state; one adapter can serve concurrent turns.
pub struct GeminiAdapter<T: Transport = HttpTransport> {
    transport: T,
    model: String,
    generation_config: GeminiGenerationConfig,
}

impl GeminiAdapter<HttpTransport> {
    pub fn from_config(config: &Config, http_client: Arc<reqwest::Client>) -> anyhow::Result<Self> {
        let model = config.native_gemini_model()?.to_string();
        let transport = HttpTransport::new(
            http_client,
            config.native_api_base(),
            config.llm_params.api_key.clone(),
        );
        let generation_config = GeminiGenerationConfig {
            temperature: config.llm_params.temperature,
            max_output_tokens: config.llm_params.max_output_tokens,
        };
        Ok(Self::new(transport, model).with_generation_config(generation_config))
    }
}

impl<T: Transport> GeminiAdapter<T> {
    pub fn new(transport: T, model: impl Into<String>) -> Self {
        Self { transport, model: model.into(), generation_config: GeminiGenerationConfig::default() }
    }

    pub fn with_generation_config(mut self, generation_config: GeminiGenerationConfig) -> Self {
        self.generation_config = generation_config;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Stream one model turn.
    ///
    /// The stream always ends with exactly one `complete` or one `error` event.
    /// `temperature` overrides the configured one for this turn only.
    pub fn generate_stream<'a>(
        &'a self,
        messages: &'a [OpenAIMessage],
        tools: &'a [OpenAITool],
        temperature: Option<f64>,
    ) -> impl Stream<Item = StreamEvent> + Send + 'a {
        let span = TurnId::new().span(&self.model);

        stream! {
            let mut generation_config = self.generation_config.clone();
            if temperature.is_some() {
                generation_config.temperature = temperature;
            }

            let translated = span.in_scope(|| {
                let translated = translate_request(messages, tools, generation_config);
                debug!(
                    "Translated {} messages into {} contents ({} signatures)",
                    messages.len(),
                    translated.body.contents.len(),
                    translated.signatures.signatures().len()
                );
                translated
            });

            let byte_stream = match self
                .transport
                .stream_generate_content(&self.model, &translated.body)
                .instrument(span.clone())
                .await
            {
                Ok(byte_stream) => byte_stream,
                Err(e) => {
                    span.in_scope(|| warn!("Gemini call failed: {}", e));
                    yield StreamEvent::error(e.to_string());
                    return;
                }
            };

            let events = translate_response_stream(byte_stream);
            futures::pin_mut!(events);
            while let Some(event) = events.next().instrument(span.clone()).await {
                yield event;
            }
        }
    }

    /// Run one turn to completion.
    ///
    /// An `error` event becomes [`AdapterError::Stream`]; a stream that stops
    /// before `complete` becomes [`AdapterError::Incomplete`].
    pub async fn generate(
        &self,
        messages: &[OpenAIMessage],
        tools: &[OpenAITool],
        temperature: Option<f64>,
    ) -> Result<Completion, AdapterError> {
        let events = self.generate_stream(messages, tools, temperature);
        futures::pin_mut!(events);

        let mut content = String::new();
        let mut tool_calls = Vec::new();
        while let Some(event) = events.next().await {
            match event {
                StreamEvent::Content { content: delta } => content.push_str(&delta),
                StreamEvent::ToolCall { tool_call } => tool_calls.push(tool_call),
                StreamEvent::Usage { .. } => {}
                StreamEvent::Error { error } => return Err(AdapterError::Stream(error)),
                StreamEvent::Complete(completion) => {
                    return Ok(Completion { content, tool_calls, ..completion });
                }
            }
        }
        Err(AdapterError::Incomplete)
    }
}
