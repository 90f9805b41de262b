use serde_json::Value;

/// Substring that marks a property as a behavioral setting, e.g.
/// `setting_numInitialRowsToSkip` or `ca_data_importers.setting_type`.
pub const SETTINGS_MARKER: &str = "setting";

/// Decides which properties of a form belong to the settings projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelector {
    /// Keys containing the substring anywhere, case-sensitive.
    Substring(String),
    /// Exactly the listed keys.
    AllowList(Vec<String>),
    /// Properties whose schema fragment carries `<annotation>: true`.
    Annotated(String),
}

impl Default for FieldSelector {
    fn default() -> Self {
        FieldSelector::Substring(SETTINGS_MARKER.to_string())
    }
}

impl FieldSelector {
    /// Selects exactly `keys`.
    pub fn allow_list<I, K>(keys: I) -> FieldSelector
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        FieldSelector::AllowList(keys.into_iter().map(Into::into).collect())
    }

    /// Whether the property named `key`, described by `schema`, is selected.
    pub fn selects(&self, key: &str, schema: &Value) -> bool {
        match self {
            FieldSelector::Substring(marker) => key.contains(marker.as_str()),
            FieldSelector::AllowList(keys) => keys.iter().any(|allowed| allowed == key),
            FieldSelector::Annotated(annotation) => {
                matches!(schema.get(annotation.as_str()), Some(Value::Bool(true)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::prefix("setting_type", true)]
    #[case::qualified("ca_data_importers.setting_type", true)]
    #[case::camel_case_suffix("setting_numInitialRowsToSkip", true)]
    #[case::inside_a_word("resettings", true)]
    #[case::capitalized("Setting_type", false)]
    #[case::identity_field("ca_data_importers.importer_code", false)]
    fn substring_selection(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(FieldSelector::default().selects(key, &json!({})), expected);
    }

    #[test]
    fn allow_list_selection_is_exact() {
        let selector = FieldSelector::allow_list(["setting_type"]);
        assert!(selector.selects("setting_type", &json!({})));
        assert!(!selector.selects("setting_type_extra", &json!({})));
    }

    #[test]
    fn annotation_selection_reads_the_schema() {
        let selector = FieldSelector::Annotated("x-setting".to_string());
        assert!(selector.selects("delimiter", &json!({"type": "string", "x-setting": true})));
        assert!(!selector.selects("setting_type", &json!({"type": "string"})));
        assert!(!selector.selects("delimiter", &json!({"x-setting": "yes"})));
    }
}
