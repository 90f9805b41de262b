pub(crate) mod de;

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of an `errors`, `warnings` or `info` list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceMessage {
    /// Row or rule the message is about, if any.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub id: Option<i64>,
    /// Machine readable code, if any.
    #[serde(default)]
    pub code: Option<String>,
    /// Human readable message.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub message: String,
}

impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "[{code}] ")?;
        }
        if let Some(id) = self.id {
            write!(f, "#{id}: ")?;
        }
        write!(f, "{}", self.message)
    }
}

/// What a delete, mapping edit or reorder mutation reports back.
///
/// A non-empty `errors` list means the service rejected or only partially
/// applied the mutation; it is returned to the caller, not raised.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationOutcome {
    /// Id of the importer the mutation applied to.
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub id: Option<i64>,
    /// Rejections.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub errors: Vec<ServiceMessage>,
    /// Problems that did not stop the mutation.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub warnings: Vec<ServiceMessage>,
    /// Informational notes.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub info: Vec<ServiceMessage>,
}

impl MutationOutcome {
    /// Whether the service reported any error for this mutation.
    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn logged(self, operation: &'static str) -> Self {
        log_messages(operation, &self.errors, &self.warnings);
        self
    }
}

pub(crate) fn log_messages(
    operation: &'static str,
    errors: &[ServiceMessage],
    warnings: &[ServiceMessage],
) {
    for error in errors {
        tracing::warn!(operation, %error, "importer service rejected the mutation");
    }
    for warning in warnings {
        tracing::info!(operation, %warning, "importer service warning");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn null_lists_are_empty() {
        let outcome: MutationOutcome = serde_json::from_value(json!({
            "id": 4,
            "errors": null,
            "warnings": [{ "message": "mapping 12 has no source" }]
        }))
        .unwrap();

        assert_that!(outcome.is_rejected()).is_false();
        assert_that!(outcome.info).is_empty();
        assert_that!(outcome.warnings[0].message.as_str()).is_equal_to("mapping 12 has no source");
    }

    #[test]
    fn messages_display_their_code_and_id() {
        let message: ServiceMessage = serde_json::from_value(json!({
            "id": "12",
            "code": "INVALID_DESTINATION",
            "message": "ca_objects.nope does not exist"
        }))
        .unwrap();
        assert_that!(message.to_string())
            .is_equal_to("[INVALID_DESTINATION] #12: ca_objects.nope does not exist".to_string());
    }
}
