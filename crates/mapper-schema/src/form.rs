use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{ProjectedForm, ProjectionError};

/// Ordered JSON object; key order is the order keys appeared in the source text.
pub type JsonObject = serde_json::Map<String, Value>;

/// An importer form exactly as the service sends it.
///
/// `properties`, `values` and `uiSchema` hold JSON text and must go through
/// [`ImporterForm::decode`] before anything reads them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDescriptor {
    /// Human readable title of the form.
    #[serde(default)]
    pub title: Option<String>,

    /// Names of the required properties.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required: Vec<String>,

    /// JSON-Schema `properties` object, as JSON text.
    #[serde(default)]
    pub properties: Option<String>,

    /// Renderer hints, as JSON text.
    #[serde(rename = "uiSchema", default)]
    pub ui_schema: Option<String>,

    /// Current values keyed like `properties`, as JSON text.
    #[serde(default)]
    pub values: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A [`FormDescriptor`] with its JSON text decoded.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ImporterForm {
    /// Human readable title of the form.
    pub title: Option<String>,
    /// Names of the required properties.
    pub required: Vec<String>,
    /// Property name to JSON-Schema fragment.
    pub properties: JsonObject,
    /// Renderer hints, if the service sent any.
    pub ui_schema: Option<Value>,
    /// Property name to current value.
    pub values: JsonObject,
}

impl ImporterForm {
    /// Decodes every double-encoded field of `descriptor`.
    ///
    /// Fails on the first field that is not valid JSON; nothing is returned
    /// for a partially valid descriptor.
    pub fn decode(descriptor: &FormDescriptor) -> Result<ImporterForm, ProjectionError> {
        let properties = decode_object("properties", descriptor.properties.as_deref())?;
        let values = decode_object("values", descriptor.values.as_deref())?;
        let ui_schema = match descriptor.ui_schema.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(
                serde_json::from_str(text).map_err(|source| ProjectionError::Parse {
                    field: "uiSchema",
                    source,
                })?,
            ),
        };

        tracing::trace!(
            properties = properties.len(),
            values = values.len(),
            "decoded importer form"
        );

        Ok(ImporterForm {
            title: descriptor.title.clone(),
            required: descriptor.required.clone(),
            properties,
            ui_schema,
            values,
        })
    }

    /// Current value of `key`, if the form carries one.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

impl From<ProjectedForm> for ImporterForm {
    fn from(projected: ProjectedForm) -> Self {
        ImporterForm {
            title: projected.schema.title,
            required: projected.schema.required,
            properties: projected.schema.properties,
            ui_schema: None,
            values: projected.values,
        }
    }
}

fn decode_object(field: &'static str, text: Option<&str>) -> Result<JsonObject, ProjectionError> {
    let Some(text) = text else {
        return Ok(JsonObject::new());
    };
    let value: Value =
        serde_json::from_str(text).map_err(|source| ProjectionError::Parse { field, source })?;
    match value {
        Value::Object(object) => Ok(object),
        // an empty map may arrive encoded as an empty list
        Value::Array(items) if items.is_empty() => Ok(JsonObject::new()),
        other => Err(ProjectionError::NotAnObject {
            field,
            found: kind_of(&other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
