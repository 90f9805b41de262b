use serde::{Deserialize, Serialize};

use crate::shared::de;

/// `name = value` option attached to a rule or a refinery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MappingOption {
    pub name: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub value: Option<String>,
}

/// A refinery that post-processes the source value of a rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Refinery {
    pub refinery: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub options: Vec<MappingOption>,
}

/// Source value substitution applied before a value is written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReplacementValue {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub original: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub replacement: Option<String>,
}

/// One mapping rule: where a source column lands in the target table.
///
/// The same shape is sent back as `ImporterMappingInput`; a rule without an
/// `id` is created by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingRule {
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub rule_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub group_id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub options: Vec<MappingOption>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub refineries: Vec<Refinery>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub replacement_values: Vec<ReplacementValue>,
}

/// The rules of one importer, in service order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingList {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub mappings: Vec<MappingRule>,
}

/// `ImporterReorderInputType`: the complete new order, by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ReorderInput {
    pub sorted_ids: Vec<i64>,
}

impl From<Vec<i64>> for ReorderInput {
    fn from(sorted_ids: Vec<i64>) -> Self {
        ReorderInput { sorted_ids }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn rules_tolerate_loose_values() {
        let rule: MappingRule = serde_json::from_value(json!({
            "id": "8",
            "type": "MAPPING",
            "group_id": 3,
            "source": 2,
            "destination": "ca_objects.idno",
            "options": [{ "name": "skipIfEmpty", "value": 1 }],
            "refineries": null,
            "replacement_values": [{ "original": "n/a", "replacement": null }]
        }))
        .unwrap();

        assert_eq!(rule.id, Some(8));
        assert_eq!(rule.source.as_deref(), Some("2"));
        assert_eq!(rule.options[0].value.as_deref(), Some("1"));
        assert!(rule.refineries.is_empty());
        assert_eq!(rule.replacement_values[0].replacement, None);
    }

    #[test]
    fn rules_serialize_with_the_wire_names() {
        let rule = MappingRule {
            rule_type: Some("CONSTANT".to_string()),
            destination: Some("ca_objects.status".to_string()),
            ..MappingRule::default()
        };
        let value = serde_json::to_value(rule).unwrap();
        assert_eq!(value["type"], json!("CONSTANT"));
        assert_eq!(value["id"], json!(null));
        assert_eq!(value["replacement_values"], json!([]));
    }
}
