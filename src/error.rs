use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    /// Upstream answered with a non-success status; `body` is already truncated.
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// An `error` event surfaced by the event stream.
    #[error("{0}")]
    Stream(String),

    #[error("stream ended without a completion event")]
    Incomplete,
}
