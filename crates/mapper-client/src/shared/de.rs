//! Deserializers for the loosely typed values the importer service returns.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats `null` like a missing value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integers, numeric strings and `null`.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_i64(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected an integer, found {value}"))),
    }
}

/// Like [`lenient_i64`] for ids the service always sends.
pub(crate) fn required_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_i64(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("expected an integer, found null"))
}

/// Accepts strings, numbers and booleans as text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(value) => Err(serde::de::Error::custom(format!(
            "expected a scalar, found {value}"
        ))),
    }
}

/// Reads an integer out of a number or a numeric string.
pub(crate) fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug)]
    struct Loose {
        #[serde(default, deserialize_with = "lenient_i64")]
        number: Option<i64>,
        #[serde(default, deserialize_with = "lenient_string")]
        text: Option<String>,
    }

    #[rstest]
    #[case::native(json!({"number": 57, "text": "list"}), Some(57), Some("list"))]
    #[case::stringly(json!({"number": "57", "text": 3}), Some(57), Some("3"))]
    #[case::boolean_text(json!({"text": false}), None, Some("false"))]
    #[case::nulls(json!({"number": null, "text": null}), None, None)]
    #[case::missing(json!({}), None, None)]
    fn it_reads_loose_values(
        #[case] input: Value,
        #[case] number: Option<i64>,
        #[case] text: Option<&str>,
    ) {
        let loose: Loose = serde_json::from_value(input).unwrap();
        assert_eq!(loose.number, number);
        assert_eq!(loose.text.as_deref(), text);
    }

    #[test]
    fn it_rejects_non_numeric_ids() {
        assert!(serde_json::from_value::<Loose>(json!({"number": "twelve"})).is_err());
    }

    #[derive(Deserialize, Debug)]
    struct Keyed {
        #[serde(deserialize_with = "required_i64")]
        id: i64,
    }

    #[rstest]
    #[case::native(json!({"id": 12}))]
    #[case::stringly(json!({"id": "12"}))]
    fn it_reads_required_ids(#[case] input: Value) {
        let keyed: Keyed = serde_json::from_value(input).unwrap();
        assert_eq!(keyed.id, 12);
    }

    #[test]
    fn it_rejects_missing_required_ids() {
        assert!(serde_json::from_value::<Keyed>(json!({"id": null})).is_err());
        assert!(serde_json::from_value::<Keyed>(json!({})).is_err());
    }
}
