pub mod openai_content;
pub mod openai_content_item;
pub mod openai_function;
pub mod openai_message;
pub mod openai_request;
pub mod openai_tool;
pub mod openai_tool_call;
pub mod openai_tool_call_function;
pub mod openai_usage;

pub use openai_content::OpenAIContent;
pub use openai_content_item::OpenAIContentItem;
pub use openai_function::OpenAIFunction;
pub use openai_message::OpenAIMessage;
pub use openai_request::OpenAIRequest;
pub use openai_tool::OpenAITool;
pub use openai_tool_call::OpenAIToolCall;
pub use openai_tool_call_function::OpenAIToolCallFunction;
pub use openai_usage::OpenAIUsage;
