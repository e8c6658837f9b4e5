//! Model-name helpers callers use to decide how to route a request.

const SIGNATURE_FAMILIES: [&str; 3] = ["gemini-3", "gemini-4", "gemini-5"];

/// Drop any provider or path prefix: `models/gemini-2.5-flash` -> `gemini-2.5-flash`.
pub fn strip_model_prefix(model: &str) -> &str {
    model.rsplit('/').next().unwrap_or(model)
}

pub fn is_gemini_model(model: &str) -> bool {
    strip_model_prefix(model).starts_with("gemini-")
}

/// Gemini 3 and later reject function responses that do not echo the call's
/// `thought_signature`.
pub fn is_gemini_3_or_later(model: &str) -> bool {
    let name = strip_model_prefix(model);
    SIGNATURE_FAMILIES.iter().any(|prefix| name.starts_with(prefix))
}
