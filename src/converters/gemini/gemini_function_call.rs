use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiFunctionCall {
    pub name: String,
    #[serde(default = "empty_args")]
    pub args: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    // Read-only: outgoing signatures always go on the part
    #[serde(alias = "thoughtSignature")]
    #[serde(default, skip_serializing)]
    pub thought_signature: Option<String>,
}

fn empty_args() -> Value {
    Value::Object(Default::default())
}
