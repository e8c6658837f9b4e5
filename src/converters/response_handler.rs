use std::pin::Pin;

use async_stream::stream;
use bytes::Bytes;
use futures::{Stream, StreamExt, TryStreamExt};
use tracing::warn;

use crate::converters::helpers::truncate;
use crate::converters::sse::SseDecoder;
use crate::converters::stream::StreamTranslator;
use crate::converters::stream_event::{StreamEvent, MAX_ERROR_LEN};
use crate::error::AdapterError;

/// Raw body of a streaming generation call.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, AdapterError>> + Send>>;

/// Check the upstream status and hand back the SSE body.
///
/// A non-success response is read to the end and returned as
/// [`AdapterError::Status`] with a truncated excerpt of its body.
pub async fn into_byte_stream(response: reqwest::Response) -> Result<ByteStream, AdapterError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        warn!("Gemini API error {}: {}", status, body);
        return Err(AdapterError::Status { status: status.as_u16(), body: truncate(&body, MAX_ERROR_LEN) });
    }
    Ok(Box::pin(response.bytes_stream().map_err(AdapterError::from)))
}

/// Convert an SSE-framed Gemini body into normalized events.
///
/// Ends with exactly one `complete` event, or with a single `error` event when
/// the byte stream fails; nothing follows an error. Dropping the returned
/// stream drops `byte_stream`, which closes the underlying connection.
pub fn translate_response_stream<S, E>(byte_stream: S) -> impl Stream<Item = StreamEvent>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    stream! {
        let mut decoder = SseDecoder::new();
        let mut translator = StreamTranslator::new();
        let mut failed = false;

        futures::pin_mut!(byte_stream);
        while let Some(result) = byte_stream.next().await {
            match result {
                Ok(bytes) => {
                    for data in decoder.push(&bytes) {
                        for event in translator.process_data(&data) {
                            yield event;
                        }
                    }
                }
                Err(e) => {
                    warn!("Upstream streaming error: {}", e);
                    yield StreamEvent::error(format!("upstream streaming error: {}", e));
                    failed = true;
                    break;
                }
            }
        }

        if !failed {
            if let Some(data) = decoder.finish() {
                for event in translator.process_data(&data) {
                    yield event;
                }
            }
            yield translator.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::stream_event::FinishReason;
    use futures::stream;
    use serde_json::json;

    async fn collect<S: Stream<Item = StreamEvent>>(events: S) -> Vec<StreamEvent> {
        events.collect::<Vec<_>>().await
    }

    fn ok(s: &str) -> Result<Bytes, String> {
        Ok(Bytes::from(s.to_string()))
    }

    #[tokio::test]
    async fn test_malformed_line_does_not_abort_stream() {
        let hello = json!({"candidates": [{"content": {"role": "model", "parts": [{"text": "hello"}]}}]});
        let s = stream::iter(vec![
            ok("data: not-json\n\n"),
            ok(&format!("data: {}\n\n", hello)),
        ]);
        let events = collect(translate_response_stream(s)).await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], StreamEvent::Content { content: "hello".to_string() });
        match &events[1] {
            StreamEvent::Complete(done) => {
                assert_eq!(done.content, "hello");
                assert_eq!(done.finish_reason, FinishReason::Stop);
            }
            other => panic!("expected complete, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_chunk_split_mid_line() {
        let body = format!(
            ": ping\ndata: {}\r\n\r\ndata: {}",
            json!({"candidates": [{"content": {"parts": [{"functionCall": {"name": "get_state", "args": {"entity_id": "sun.sun"}}, "thoughtSignature": "sigA"}]}}]}),
            json!({"usageMetadata": {"promptTokenCount": 2, "candidatesTokenCount": 3, "totalTokenCount": 5}})
        );
        let (a, b) = body.split_at(body.len() / 2);
        let events = collect(translate_response_stream(stream::iter(vec![ok(a), ok(b)]))).await;

        assert_eq!(events.len(), 3);
        match &events[0] {
            StreamEvent::ToolCall { tool_call } => {
                assert_eq!(tool_call.id, "get_state_0");
                assert_eq!(tool_call.thought_signature.as_deref(), Some("sigA"));
            }
            other => panic!("expected tool_call, got {:?}", other),
        }
        assert!(matches!(events[1], StreamEvent::Usage { .. }));
        match &events[2] {
            StreamEvent::Complete(done) => {
                assert_eq!(done.finish_reason, FinishReason::ToolCalls);
                assert_eq!(done.thought_signature.as_deref(), Some("sigA"));
                assert_eq!(done.usage.unwrap().completion_tokens, 3);
            }
            other => panic!("expected complete, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_ends_stream_without_complete() {
        let first = json!({"candidates": [{"content": {"parts": [{"text": "partial"}]}}]});
        let s = stream::iter(vec![
            ok(&format!("data: {}\n", first)),
            Err("connection reset".to_string()),
            ok(&format!("data: {}\n", first)),
        ]);
        let events = collect(translate_response_stream(s)).await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], StreamEvent::Content { content: "partial".to_string() });
        match &events[1] {
            StreamEvent::Error { error } => assert!(error.contains("connection reset")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_body_still_completes() {
        let events = collect(translate_response_stream(stream::iter(Vec::<Result<Bytes, String>>::new()))).await;
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], StreamEvent::Complete(_)));
    }
}
