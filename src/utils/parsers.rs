use serde_json::Value;

use crate::error::InvalidKeyValue;

/// Splits `key=value` at the first `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), InvalidKeyValue> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(InvalidKeyValue(raw.to_string())),
    }
}

/// Like [`parse_key_value`], reading the value as JSON when it is valid JSON
/// and as a plain string otherwise.
pub fn parse_setting(raw: &str) -> Result<(String, Value), InvalidKeyValue> {
    let (key, value) = parse_key_value(raw)?;
    let value = serde_json::from_str(&value).unwrap_or(Value::String(value));
    Ok((key, value))
}
