pub mod gemini_candidate;
pub mod gemini_content;
pub mod gemini_finish_reason;
pub mod gemini_function_call;
pub mod gemini_function_declaration;
pub mod gemini_function_response;
pub mod gemini_generation_config;
pub mod gemini_part;
pub mod gemini_request;
pub mod gemini_stream_chunk;
pub mod gemini_tool;
pub mod gemini_usage;

pub use gemini_candidate::GeminiCandidate;
pub use gemini_content::{GeminiContent, GeminiRole};
pub use gemini_finish_reason::GeminiFinishReason;
pub use gemini_function_call::GeminiFunctionCall;
pub use gemini_function_declaration::GeminiFunctionDeclaration;
pub use gemini_function_response::GeminiFunctionResponse;
pub use gemini_generation_config::GeminiGenerationConfig;
pub use gemini_part::GeminiPart;
pub use gemini_request::{translate_request, GeminiRequest, TranslatedRequest};
pub use gemini_stream_chunk::GeminiStreamChunk;
pub use gemini_tool::GeminiTool;
pub use gemini_usage::GeminiUsage;
