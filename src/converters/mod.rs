pub mod gemini;
pub mod helpers;
pub mod openai;
pub mod response_handler;
pub mod signature_ledger;
pub mod sse;
pub mod stream;
pub mod stream_event;
