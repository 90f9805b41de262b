use serde::{Deserialize, Serialize};

use crate::shared::{de, ServiceMessage};

/// One configured importer, as listed by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImporterDescriptor {
    #[serde(deserialize_with = "de::required_i64")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub formats: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// `ImporterSetting` input: one `code = value` pair
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImporterSetting {
    pub code: String,
    pub value: String,
}

impl ImporterSetting {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> ImporterSetting {
        ImporterSetting {
            code: code.into(),
            value: value.into(),
        }
    }
}

/// Arguments shared by the add and edit mutations.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ImporterInput {
    pub name: Option<String>,
    pub formats: Vec<String>,
    pub code: Option<String>,
    pub table: Option<String>,
    #[serde(rename = "type")]
    pub importer_type: Option<i64>,
    pub settings: Vec<ImporterSetting>,
}

/// What the add and edit mutations report back: the importer as stored,
/// plus any rejection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ImporterMutationResult {
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "de::lenient_i64")]
    pub importer_type: Option<i64>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub formats: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub errors: Vec<ServiceMessage>,
}

impl ImporterMutationResult {
    /// Whether the service refused the mutation.
    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The stored importer, when the service assigned it an id.
    pub fn descriptor(&self) -> Option<ImporterDescriptor> {
        self.id.map(|id| ImporterDescriptor {
            id,
            name: self.name.clone(),
            code: self.code.clone(),
            table: self.table.clone(),
            formats: self.formats.clone(),
            source: self.source.clone(),
        })
    }

    pub(crate) fn logged(self, operation: &'static str) -> Self {
        crate::shared::log_messages(operation, &self.errors, &[]);
        self
    }
}
