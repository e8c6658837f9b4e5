use std::collections::HashMap;

use tracing::debug;

use crate::converters::helpers::function_name_from_call_id;

/// Thought signatures and call bindings seen while translating one conversation.
///
/// Built while walking the assistant turns, consulted when the matching tool
/// results are translated, and handed back to the caller with the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureLedger {
    by_call_id: HashMap<String, String>,
    by_function: HashMap<String, String>,
    call_names: HashMap<String, String>,
}

impl SignatureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the call `id -> name` binding, plus its signature when present.
    /// Later calls with the same id or name replace earlier ones.
    pub fn record_call(&mut self, call_id: &str, function_name: &str, signature: Option<&str>) {
        if !call_id.is_empty() {
            self.call_names.insert(call_id.to_string(), function_name.to_string());
        }
        if let Some(sig) = signature {
            debug!("Recording thought_signature for {} ({})", function_name, call_id);
            if !call_id.is_empty() {
                self.by_call_id.insert(call_id.to_string(), sig.to_string());
            }
            self.by_function.insert(function_name.to_string(), sig.to_string());
        }
    }

    /// Name of the function a tool result answers.
    pub fn resolve_function_name(&self, tool_call_id: &str, explicit: Option<&str>) -> String {
        if let Some(name) = explicit.filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        if let Some(name) = self.call_names.get(tool_call_id) {
            return name.clone();
        }
        function_name_from_call_id(tool_call_id)
    }

    /// Signature to echo back with the result for `tool_call_id` / `function_name`.
    pub fn signature_for(&self, tool_call_id: &str, function_name: &str) -> Option<&str> {
        self.by_call_id
            .get(tool_call_id)
            .or_else(|| self.by_function.get(function_name))
            .map(String::as_str)
    }

    /// Signatures keyed by function name.
    pub fn signatures(&self) -> &HashMap<String, String> {
        &self.by_function
    }
}
