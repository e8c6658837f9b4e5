use crate::converters::gemini::GeminiRequest;
use crate::converters::helpers::truncate;
use crate::converters::response_handler::{into_byte_stream, ByteStream};
use crate::error::AdapterError;
use crate::model_family::strip_model_prefix;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use std::sync::Arc;
use tracing::{debug, info};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Carries one streaming generation call to Gemini and returns the raw SSE body.
///
/// Implementations make a single attempt; retries are the caller's business.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn stream_generate_content(
        &self,
        model: &str,
        request: &GeminiRequest,
    ) -> Result<ByteStream, AdapterError>;
}

/// `streamGenerateContent` over HTTP with `alt=sse`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Arc<reqwest::Client>,
    api_base: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(http_client: Arc<reqwest::Client>, api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { http_client, api_base: api_base.into(), api_key: api_key.into() }
    }

    fn build_target_url(&self, model: &str) -> String {
        let path = format!("models/{}:streamGenerateContent?alt=sse", strip_model_prefix(model));
        if self.api_base.ends_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn stream_generate_content(
        &self,
        model: &str,
        request: &GeminiRequest,
    ) -> Result<ByteStream, AdapterError> {
        let target_url = self.build_target_url(model);

        let mut target_request = self
            .http_client
            .post(&target_url)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream");

        if !self.api_key.is_empty() {
            if let Ok(val) = HeaderValue::from_str(&self.api_key) {
                target_request = target_request.header("x-goog-api-key", val);
            }
        }

        info!("Calling Gemini API (streaming): {}", target_url);
        if tracing::enabled!(tracing::Level::DEBUG) {
            let body = serde_json::to_string(request).unwrap_or_default();
            debug!("request body: {}", truncate(&body, 1000));
        }

        let response = target_request.json(request).send().await?;
        into_byte_stream(response).await
    }
}
