mod metadata;

pub use metadata::{MapperErrorCode, MapperErrorMetadata, MapperErrorSuggestion};

pub type MapperResult<T> = std::result::Result<T, MapperError>;

use std::borrow::BorrowMut;
use std::fmt::{self, Debug, Display};
use std::io::{self, Write};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use thiserror::Error;

use crate::style::Style;

/// A specialized `Error` type for mapper that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Serialize, Debug)]
pub struct MapperError {
    #[serde(flatten, serialize_with = "serialize_anyhow")]
    error: anyhow::Error,

    #[serde(flatten)]
    metadata: MapperErrorMetadata,
}

fn serialize_anyhow<S>(error: &anyhow::Error, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut data = serializer.serialize_struct("error", 1)?;
    data.serialize_field("message", &error.to_string())?;
    data.end()
}

impl MapperError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = MapperErrorMetadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn set_suggestion(&mut self, suggestion: MapperErrorSuggestion) {
        self.metadata.suggestion = Some(suggestion);
    }

    pub fn suggestion(&self) -> Option<&MapperErrorSuggestion> {
        self.metadata.suggestion.as_ref()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn code(&self) -> Option<MapperErrorCode> {
        self.metadata.code
    }

    pub fn print(&self) -> io::Result<()> {
        write!(io::stderr(), "{self}")
    }

    pub fn get_json(&self) -> Value {
        self.get_json_with_data(Value::Null)
    }

    /// The JSON envelope for a failed run that still produced `data`.
    pub fn get_json_with_data(&self, data: Value) -> Value {
        json!({ "data": data, "error": self })
    }
}

impl Display for MapperError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{code}]:")
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        if self.metadata.skip_printing_cause {
            writeln!(formatter, "{} {}", error_descriptor, &self.error)?;
        } else {
            writeln!(formatter, "{} {:#}", error_descriptor, &self.error)?;
        }

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {suggestion}")?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for MapperError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// The service answered a mutation with a non-empty `errors` list.
#[derive(Error, Debug)]
#[error("the importer service rejected the '{operation}' mutation:\n{}", .messages.join("\n"))]
pub struct MutationRejected {
    pub operation: &'static str,
    pub messages: Vec<String>,
}

/// A `key=value` argument that could not be split.
#[derive(Error, Debug)]
#[error("'{0}' is not a key=value pair")]
pub struct InvalidKeyValue(pub String);

#[cfg(test)]
mod tests {
    use mapper_client::GatewayError;
    use mapper_config::ConfigProblem;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn missing_fields_carry_a_code_and_suggestion() {
        let error = MapperError::new(GatewayError::MissingField { field: "list" });
        assert_that!(error.code()).is_equal_to(Some(MapperErrorCode::E004));
        assert_that!(error.suggestion()).is_some();
    }

    #[test]
    fn unknown_profiles_suggest_configuring_one() {
        let error = MapperError::new(ConfigProblem::ProfileNotFound("staging".to_string()));
        assert_that!(error.code()).is_equal_to(Some(MapperErrorCode::E006));
        assert_that!(error.suggestion().map(ToString::to_string))
            .is_some()
            .contains("mapper config set --profile staging");
    }

    #[test]
    fn display_includes_the_code() {
        let error = MapperError::new(MutationRejected {
            operation: "delete",
            messages: vec!["Importer is in use".to_string()],
        });
        let printed = console::strip_ansi_codes(&error.to_string()).to_string();
        assert_that!(printed).starts_with("error[E009]: the importer service rejected");
        assert_that!(printed).contains("Importer is in use");
    }

    #[test]
    fn json_errors_have_a_message_and_code() {
        let error = MapperError::new(anyhow::anyhow!("boom"));
        let json = error.get_json();
        assert_eq!(json["data"], Value::Null);
        assert_eq!(json["error"]["message"], json!("boom"));
        assert_eq!(json["error"]["code"], Value::Null);
    }

    #[test]
    fn rejected_runs_keep_their_data_in_the_envelope() {
        let error = MapperError::new(MutationRejected {
            operation: "delete",
            messages: vec!["Importer is in use".to_string()],
        });
        let json = error.get_json_with_data(json!({ "id": 7 }));
        assert_eq!(json["data"]["id"], json!(7));
        assert_eq!(json["error"]["code"], json!("E009"));
    }
}
