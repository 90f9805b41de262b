use std::future::Future;

use mapper_schema::{project, FieldSelector, ImporterForm, JsonObject, ProjectedForm};
use serde_json::Value;

use crate::{
    operations::importer::{
        self, ImporterDescriptor, ImporterInput, ImporterMutationResult, ImporterSetting,
    },
    shared::de,
    ImporterClient, SessionError,
};

/// Form property holding the importer's display name.
pub const NAME_FIELD: &str = "ca_data_importers.preferred_labels.name";
/// Form property holding the importer's code.
pub const CODE_FIELD: &str = "ca_data_importers.importer_code";
/// Form property holding the numeric type of the importer.
pub const TYPE_FIELD: &str = "ca_data_importers.table_num";
/// Setting code that carries the accepted input formats.
pub const FORMATS_SETTING: &str = "inputFormats";
/// Marker in a setting key; the code is whatever follows it.
pub const SETTING_PREFIX: &str = "setting_";
/// Setting code that is always sent on save.
pub const EXISTING_RECORD_POLICY: &str = "existingRecordPolicy";
/// The only policy the session ever sends.
pub const SKIP_ON_IDNO: &str = "skip_on_idno";

/// Proof of a selection; a load started with an older ticket is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    importer_id: Option<i64>,
}

impl SelectionTicket {
    /// The importer this ticket selected, `None` for a new one.
    pub fn importer_id(&self) -> Option<i64> {
        self.importer_id
    }
}

/// A fetched and projected form, waiting to be applied.
#[derive(Debug, Clone)]
pub struct LoadedForm {
    ticket: SelectionTicket,
    form: ImporterForm,
    projection: ProjectedForm,
}

impl LoadedForm {
    /// The selection this form was loaded for.
    pub fn ticket(&self) -> SelectionTicket {
        self.ticket
    }
}

/// Whether [`EditSession::apply`] took the loaded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The form belongs to the current selection and is now shown.
    Current,
    /// Another importer was selected in the meantime; the form was dropped.
    Stale,
}

/// Result of [`EditSession::save`].
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// What the add or edit mutation reported, rejections included.
    pub result: ImporterMutationResult,
    /// The refreshed importer list, `None` when refreshing failed.
    pub importers: Option<Vec<ImporterDescriptor>>,
}

/// Holds the importer being edited: its full form, the settings projected out
/// of it, and the selection those belong to.
#[derive(Debug)]
pub struct EditSession {
    client: ImporterClient,
    selector: FieldSelector,
    default_table: String,
    importer_id: Option<i64>,
    generation: u64,
    form: Option<ImporterForm>,
    projection: Option<ProjectedForm>,
}

impl EditSession {
    /// A session with nothing selected that saves new importers into `default_table`.
    pub fn new(
        client: ImporterClient,
        selector: FieldSelector,
        default_table: impl Into<String>,
    ) -> EditSession {
        EditSession {
            client,
            selector,
            default_table: default_table.into(),
            importer_id: None,
            generation: 0,
            form: None,
            projection: None,
        }
    }

    /// Selected importer, `None` while creating a new one.
    pub fn importer_id(&self) -> Option<i64> {
        self.importer_id
    }

    /// The settings currently shown, if a form has been applied.
    pub fn projection(&self) -> Option<&ProjectedForm> {
        self.projection.as_ref()
    }

    /// The full form currently loaded.
    pub fn form(&self) -> Option<&ImporterForm> {
        self.form.as_ref()
    }

    /// Switches to importer `id` (or to a new importer) and forgets the
    /// previous form. Loads started before this call become stale.
    pub fn select(&mut self, id: Option<i64>) -> SelectionTicket {
        self.generation += 1;
        self.importer_id = id;
        self.form = None;
        self.projection = None;
        tracing::debug!(importer_id = ?id, generation = self.generation, "selected importer");
        SelectionTicket {
            generation: self.generation,
            importer_id: id,
        }
    }

    /// Fetches and projects the form for `ticket`.
    ///
    /// The returned future does not borrow the session, so the session can
    /// be reselected while it runs.
    pub fn load(
        &self,
        ticket: SelectionTicket,
    ) -> impl Future<Output = Result<LoadedForm, SessionError>> + Send + 'static {
        let client = self.client.clone();
        let selector = self.selector.clone();
        async move {
            let descriptor = importer::form::run(&client, ticket.importer_id).await?;
            let form = ImporterForm::decode(&descriptor)?;
            let projection = project(&form, &selector);
            Ok(LoadedForm {
                ticket,
                form,
                projection,
            })
        }
    }

    /// Shows `loaded` unless another selection happened after its ticket was issued.
    pub fn apply(&mut self, loaded: LoadedForm) -> Applied {
        if loaded.ticket.generation != self.generation {
            tracing::debug!(
                stale = loaded.ticket.generation,
                current = self.generation,
                "dropped a form loaded for an earlier selection"
            );
            return Applied::Stale;
        }
        self.form = Some(loaded.form);
        self.projection = Some(loaded.projection);
        Applied::Current
    }

    /// Selects `id` and loads its form.
    pub async fn select_and_load(&mut self, id: Option<i64>) -> Result<Applied, SessionError> {
        let ticket = self.select(id);
        let loaded = self.load(ticket).await?;
        Ok(self.apply(loaded))
    }

    /// Saves the shown settings, with `edits` applied on top.
    ///
    /// Edits an existing importer or adds a new one, then refreshes the
    /// importer list. A rejection is part of the outcome, not an error.
    pub async fn save(&mut self, edits: JsonObject) -> Result<SaveOutcome, SessionError> {
        let (Some(form), Some(projection)) = (&self.form, &self.projection) else {
            return Err(SessionError::NothingLoaded);
        };

        let mut settings = projection.values.clone();
        for (key, value) in edits {
            if !settings.contains_key(&key) {
                return Err(SessionError::UnknownSetting { key });
            }
            settings.insert(key, value);
        }

        let input = build_save_input(form, &settings, &self.default_table);
        let result = match self.importer_id {
            Some(id) => importer::edit::run(&self.client, id, input).await?,
            None => importer::add::run(&self.client, input).await?,
        };

        if !result.is_rejected() {
            if let Some(projection) = self.projection.as_mut() {
                projection.values = settings;
            }
            if self.importer_id.is_none() {
                if let Some(id) = result.id {
                    tracing::info!(importer_id = id, "created importer");
                    self.importer_id = Some(id);
                    self.generation += 1;
                }
            }
        }

        let importers = importer::list::run(&self.client).await.ok();
        Ok(SaveOutcome { result, importers })
    }
}

/// Assembles the add/edit arguments from the full form and the settings values.
///
/// Name, code and type come from the form; formats come from
/// [`FORMATS_SETTING`]; every other non-null setting is sent by its code, and
/// the record policy is always [`SKIP_ON_IDNO`].
pub fn build_save_input(form: &ImporterForm, settings: &JsonObject, table: &str) -> ImporterInput {
    let formats = match settings
        .iter()
        .find(|(key, _)| setting_code(key) == FORMATS_SETTING)
        .map(|(_, value)| value)
    {
        Some(Value::Array(items)) => items.iter().filter_map(value_as_text).collect(),
        Some(value) => value_as_text(value).into_iter().collect(),
        None => Vec::new(),
    };

    let mut sent: Vec<ImporterSetting> = settings
        .iter()
        .filter_map(|(key, value)| {
            let code = setting_code(key);
            if code == FORMATS_SETTING || code == EXISTING_RECORD_POLICY {
                return None;
            }
            value_as_text(value).map(|value| ImporterSetting::new(code, value))
        })
        .collect();
    sent.push(ImporterSetting::new(EXISTING_RECORD_POLICY, SKIP_ON_IDNO));

    ImporterInput {
        name: form.value(NAME_FIELD).and_then(value_as_text),
        formats,
        code: form.value(CODE_FIELD).and_then(value_as_text),
        table: Some(table.to_string()),
        importer_type: form.value(TYPE_FIELD).and_then(de::as_i64),
        settings: sent,
    }
}

/// `setting_delimiter` and `ca_data_importers.setting_delimiter` both give `delimiter`.
fn setting_code(key: &str) -> &str {
    key.split_once(SETTING_PREFIX).map_or(key, |(_, code)| code)
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use mapper_http::{HttpService, HttpServiceError, HttpServiceFactory};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use speculoos::prelude::*;
    use url::Url;

    use super::*;
    use crate::ClientConfig;

    struct Unreachable;

    impl HttpServiceFactory for Unreachable {
        fn create(&self) -> Result<HttpService, HttpServiceError> {
            Err(HttpServiceError::Unexpected(
                "no transport in unit tests".into(),
            ))
        }
    }

    #[fixture]
    fn session() -> EditSession {
        let config = ClientConfig::builder()
            .endpoint(Url::parse("http://localhost/graphql").unwrap())
            .build();
        EditSession::new(
            ImporterClient::with_factory(config, Unreachable),
            FieldSelector::default(),
            "ca_objects",
        )
    }

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[fixture]
    fn form() -> ImporterForm {
        ImporterForm {
            title: Some("Importer".to_string()),
            values: object(json!({
                NAME_FIELD: "Objects from CSV",
                CODE_FIELD: "objects_csv",
                TYPE_FIELD: "57",
                "setting_inputFormats": ["csv"]
            })),
            ..ImporterForm::default()
        }
    }

    fn loaded(ticket: SelectionTicket, form: ImporterForm) -> LoadedForm {
        let projection = project(&form, &FieldSelector::default());
        LoadedForm {
            ticket,
            form,
            projection,
        }
    }

    #[rstest]
    fn save_input_comes_from_form_and_settings(form: ImporterForm) {
        let settings = object(json!({
            "setting_inputFormats": ["csv", "xlsx"],
            "setting_numInitialRowsToSkip": 1,
            "ca_data_importers.setting_type": "delimited",
            "setting_delimiter": null
        }));

        let input = build_save_input(&form, &settings, "ca_objects");

        assert_eq!(input.name.as_deref(), Some("Objects from CSV"));
        assert_eq!(input.code.as_deref(), Some("objects_csv"));
        assert_eq!(input.importer_type, Some(57));
        assert_eq!(input.table.as_deref(), Some("ca_objects"));
        assert_eq!(input.formats, vec!["csv", "xlsx"]);
        assert_eq!(
            input.settings,
            vec![
                ImporterSetting::new("numInitialRowsToSkip", "1"),
                ImporterSetting::new("type", "delimited"),
                ImporterSetting::new(EXISTING_RECORD_POLICY, SKIP_ON_IDNO),
            ]
        );
    }

    #[rstest]
    fn the_record_policy_cannot_be_overridden(form: ImporterForm) {
        let settings = object(json!({ "setting_existingRecordPolicy": "merge_on_idno" }));

        let input = build_save_input(&form, &settings, "ca_objects");

        assert_eq!(
            input.settings,
            vec![ImporterSetting::new(EXISTING_RECORD_POLICY, SKIP_ON_IDNO)]
        );
    }

    #[rstest]
    fn a_single_format_string_is_accepted(form: ImporterForm) {
        let settings = object(json!({ "setting_inputFormats": "xlsx" }));
        let input = build_save_input(&form, &settings, "ca_entities");
        assert_eq!(input.formats, vec!["xlsx"]);
        assert_eq!(input.table.as_deref(), Some("ca_entities"));
    }

    #[rstest]
    fn loads_for_an_earlier_selection_are_stale(mut session: EditSession, form: ImporterForm) {
        let first = session.select(Some(1));
        let second = session.select(Some(2));

        assert_that!(session.apply(loaded(first, form.clone()))).is_equal_to(Applied::Stale);
        assert_that!(session.projection()).is_none();

        assert_that!(session.apply(loaded(second, form))).is_equal_to(Applied::Current);
        assert_that!(session.importer_id()).is_equal_to(Some(2));
        assert_that!(session.projection()).is_some();
    }

    #[rstest]
    fn selecting_forgets_the_previous_form(mut session: EditSession, form: ImporterForm) {
        let ticket = session.select(None);
        session.apply(loaded(ticket, form));
        assert_that!(session.form()).is_some();

        session.select(Some(3));
        assert_that!(session.form()).is_none();
    }

    #[rstest]
    #[tokio::test]
    async fn saving_needs_a_loaded_form(mut session: EditSession) {
        let result = session.save(JsonObject::new()).await;
        assert!(matches!(result, Err(SessionError::NothingLoaded)));
    }

    #[rstest]
    #[tokio::test]
    async fn edits_must_name_a_setting(mut session: EditSession, form: ImporterForm) {
        let ticket = session.select(Some(1));
        session.apply(loaded(ticket, form));

        let result = session
            .save(object(json!({ CODE_FIELD: "renamed" })))
            .await;

        assert!(matches!(
            result,
            Err(SessionError::UnknownSetting { key }) if key == CODE_FIELD
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn transport_failures_surface_from_load(session: EditSession) {
        let ticket = SelectionTicket {
            generation: 0,
            importer_id: Some(1),
        };
        let result = session.load(ticket).await;
        assert!(matches!(result, Err(SessionError::Gateway(_))));
    }
}
