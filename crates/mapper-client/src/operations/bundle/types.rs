use serde::{Deserialize, Serialize};

use crate::shared::de;

/// `name = value` pair describing a bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BundleSetting {
    pub name: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub value: Option<String>,
}

/// Record type a bundle is restricted to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeRestriction {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "de::lenient_string")]
    pub restriction_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub min_attributes_per_row: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub max_attributes_per_row: Option<i64>,
}

/// One element of a container bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subelement {
    #[serde(default)]
    pub name: Option<String>,
    pub code: String,
    #[serde(rename = "type", default, deserialize_with = "de::lenient_string")]
    pub element_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub data_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub list: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub settings: Vec<BundleSetting>,
}

/// A destination a mapping rule can write to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BundleDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "de::lenient_string")]
    pub bundle_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub data_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub list: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub type_restrictions: Vec<TypeRestriction>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub settings: Vec<BundleSetting>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub subelements: Vec<Subelement>,
}

/// A bundle matching a lookup search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BundleMatch {
    #[serde(default)]
    pub name: Option<String>,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Result of a bundle lookup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct BundleLookup {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub matches: Vec<BundleMatch>,
}
