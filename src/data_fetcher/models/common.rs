//! Serde helpers shared by the hub models.
//!
//! The hub API serializes decimal columns (points, scores) as strings such as
//! `"120.50"` while computed fields arrive as plain JSON numbers. Player ids
//! may be numeric or string keys depending on the sync source.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn parse_decimal<E: de::Error>(value: NumberOrString) -> Result<f64, E> {
    match value {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid decimal value '{s}'"))),
    }
}

/// Accepts `120.5` or `"120.50"`.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_decimal(NumberOrString::deserialize(deserializer)?)
}

/// Like [`deserialize_decimal`] but `null` and `""` become `None`.
pub fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => parse_decimal(value).map(Some),
    }
}

/// Accepts `4046` or `"4046"` and keeps it as a string key.
pub fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(i64),
        Text(String),
    }

    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Int(n) => n.to_string(),
        IdValue::Text(s) => s,
    })
}

/// Optional display key: `4`, `"alex"`, `null` or missing.
///
/// Any other JSON shape is dropped to `None` so an odd display field never
/// rejects the whole record.
pub fn deserialize_optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "deserialize_decimal")]
        score: f64,
        #[serde(default, deserialize_with = "deserialize_optional_decimal")]
        maybe: Option<f64>,
        #[serde(deserialize_with = "deserialize_id_string")]
        id: String,
    }

    #[test]
    fn test_decimal_from_string_and_number() {
        let sample: Sample =
            serde_json::from_str(r#"{"score": "120.50", "maybe": 3, "id": 7}"#).unwrap();
        assert_eq!(sample.score, 120.5);
        assert_eq!(sample.maybe, Some(3.0));
        assert_eq!(sample.id, "7");

        let sample: Sample =
            serde_json::from_str(r#"{"score": 99.25, "maybe": null, "id": "4046"}"#).unwrap();
        assert_eq!(sample.score, 99.25);
        assert_eq!(sample.maybe, None);
        assert_eq!(sample.id, "4046");
    }

    #[test]
    fn test_missing_optional_decimal() {
        let sample: Sample = serde_json::from_str(r#"{"score": 1, "id": 1}"#).unwrap();
        assert_eq!(sample.maybe, None);

        let sample: Sample = serde_json::from_str(r#"{"score": 1, "maybe": "", "id": 1}"#).unwrap();
        assert_eq!(sample.maybe, None);
    }

    #[derive(Deserialize)]
    struct Owner {
        #[serde(default, deserialize_with = "deserialize_optional_id_string")]
        owner: Option<String>,
    }

    #[test]
    fn test_optional_id_string_shapes() {
        let parse = |json: &str| serde_json::from_str::<Owner>(json).unwrap().owner;
        assert_eq!(parse(r#"{"owner": 4}"#).as_deref(), Some("4"));
        assert_eq!(parse(r#"{"owner": "alex"}"#).as_deref(), Some("alex"));
        assert_eq!(parse(r#"{"owner": null}"#), None);
        assert_eq!(parse(r#"{"owner": ""}"#), None);
        assert_eq!(parse(r#"{"owner": {"id": 4}}"#), None);
        assert_eq!(parse("{}"), None);
    }

    #[test]
    fn test_invalid_decimal_string() {
        let result = serde_json::from_str::<Sample>(r#"{"score": "lots", "id": 1}"#);
        assert!(result.is_err());
    }
}
