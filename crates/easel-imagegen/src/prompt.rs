use serde_json::{Number, Value};

use crate::error::{ImageGenError, Result};

/// Pull the trimmed prompt out of a raw request body
///
/// An empty body reads as `{}`. Bodies that are not valid JSON, and a bare
/// `null`, are internal errors; any other JSON without a usable prompt is a
/// missing prompt.
pub(crate) fn extract_prompt(body: &[u8]) -> Result<String> {
    let text = String::from_utf8_lossy(body);
    let text = if text.is_empty() { "{}" } else { text.as_ref() };

    let value: Value = serde_json::from_str(text)?;

    if value.is_null() {
        return Err(ImageGenError::Internal(
            "Cannot read properties of null (reading 'prompt')".to_owned(),
        ));
    }

    let prompt = value.get("prompt").map(coerce_text).unwrap_or_default();
    let prompt = prompt.trim();

    if prompt.is_empty() {
        return Err(ImageGenError::MissingPrompt);
    }

    Ok(prompt.to_owned())
}

/// Textual form of a scalar prompt value
///
/// Falsy scalars (`false`, `0`, `null`) and structured values yield nothing.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_owned(),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => number_text(n),
        _ => String::new(),
    }
}

/// Integral floats print without a fractional part (`1.0` -> `1`)
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
