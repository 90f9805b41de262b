use serde::Serialize;
use serde_json::Value;

use crate::{FieldSelector, FormDescriptor, ImporterForm, JsonObject, ProjectionError};

/// The reduced JSON-Schema handed to a form renderer.
///
/// `title` and `required` are copied from the source form untouched, so
/// `required` may name properties that were not selected.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsProjection {
    /// Title of the source form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Required list of the source form.
    pub required: Vec<String>,
    /// Selected properties in source order.
    pub properties: JsonObject,
}

/// A [`SettingsProjection`] together with its value map.
///
/// The value map has exactly the keys of `schema.properties`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectedForm {
    /// Reduced schema.
    pub schema: SettingsProjection,
    /// Values keyed like `schema.properties`.
    pub values: JsonObject,
}

impl ProjectedForm {
    /// Current value of a selected property.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Projects `form` onto the properties picked by `selector`.
///
/// Values for selected properties the form has no value for fall back to the
/// property's `default`, then to `null`. Values without a selected property
/// are dropped.
pub fn project(form: &ImporterForm, selector: &FieldSelector) -> ProjectedForm {
    let properties: JsonObject = form
        .properties
        .iter()
        .filter(|(key, schema)| selector.selects(key, schema))
        .map(|(key, schema)| (key.clone(), schema.clone()))
        .collect();

    let values: JsonObject = properties
        .iter()
        .map(|(key, schema)| {
            let value = form
                .values
                .get(key)
                .or_else(|| schema.get("default"))
                .cloned()
                .unwrap_or(Value::Null);
            (key.clone(), value)
        })
        .collect();

    let orphaned = form
        .values
        .keys()
        .filter(|key| selector.selects(key, &Value::Null) && !properties.contains_key(*key))
        .count();
    if orphaned > 0 {
        tracing::debug!(orphaned, "dropped setting values with no matching property");
    }

    ProjectedForm {
        schema: SettingsProjection {
            title: form.title.clone(),
            required: form.required.clone(),
            properties,
        },
        values,
    }
}

/// Decodes `descriptor` and projects it in one step.
pub fn project_descriptor(
    descriptor: &FormDescriptor,
    selector: &FieldSelector,
) -> Result<ProjectedForm, ProjectionError> {
    let form = ImporterForm::decode(descriptor)?;
    Ok(project(&form, selector))
}
