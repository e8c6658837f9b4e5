use std::fmt;
use tracing::{info_span, Span};
use uuid::Uuid;

/// Correlates the log lines of one adapter turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnId(pub String);

impl TurnId {
    pub fn new() -> Self {
        TurnId(Uuid::new_v4().to_string())
    }

    pub fn span(&self, model: &str) -> Span {
        info_span!("gemini_turn", turn_id = %self.0, model = %model)
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
