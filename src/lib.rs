pub mod adapter;
pub mod config;
pub mod converters;
pub mod error;
pub mod llm_client;
pub mod logging;
pub mod model_family;
pub mod request_id;

pub use adapter::GeminiAdapter;
pub use converters::gemini::{translate_request, TranslatedRequest};
pub use converters::response_handler::translate_response_stream;
pub use converters::signature_ledger::SignatureLedger;
pub use converters::stream_event::{Completion, FinishReason, StreamEvent};
pub use error::AdapterError;
pub use llm_client::{HttpTransport, Transport};
pub use model_family::{is_gemini_3_or_later, is_gemini_model, strip_model_prefix};
