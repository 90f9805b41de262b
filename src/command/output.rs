use std::io::{self, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use mapper_client::{
    operations::{
        bundle::{BundleDescriptor, BundleLookup},
        importer::{ImporterDescriptor, ImporterMutationResult},
        mapping::MappingList,
    },
    session::SaveOutcome,
    shared::{MutationOutcome, ServiceMessage},
};
use mapper_schema::{ImporterForm, ProjectedForm};
use serde_json::{json, Value};

use crate::error::MutationRejected;

/// How command output is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatType {
    /// Human readable tables and text
    #[default]
    Plain,
    /// One JSON document with `data` and `error` fields
    Json,
}

/// MapperOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of mapper's commands should return
/// `MapperResult<MapperOutput>`; print logic lives here.
#[derive(Clone, Debug)]
pub enum MapperOutput {
    Importers(Vec<ImporterDescriptor>),
    ImporterForm(ImporterForm),
    ImporterSaved {
        operation: &'static str,
        result: ImporterMutationResult,
    },
    Mutation {
        operation: &'static str,
        outcome: MutationOutcome,
    },
    Mappings(MappingList),
    Bundles(Vec<BundleDescriptor>),
    BundleMatches(BundleLookup),
    Settings(ProjectedForm),
    SettingsSaved(SaveOutcome),
    Profiles(Vec<String>),
    Profile {
        name: String,
        endpoint: String,
        token: Option<String>,
        default_table: String,
    },
    EmptySuccess,
}

impl MapperOutput {
    pub fn get_stdout(&self) -> Option<String> {
        match self {
            MapperOutput::Importers(importers) => {
                if importers.is_empty() {
                    return Some("There are no importers.".to_string());
                }
                let mut table = get_table();
                table.set_header(vec!["Id", "Name", "Code", "Table", "Formats", "Source"]);
                for importer in importers {
                    table.add_row(vec![
                        importer.id.to_string(),
                        or_na(importer.name.as_deref()),
                        or_na(importer.code.as_deref()),
                        or_na(importer.table.as_deref()),
                        importer.formats.join(", "),
                        or_na(importer.source.as_deref()),
                    ]);
                }
                Some(table.to_string())
            }
            MapperOutput::ImporterForm(form) => {
                let mut table = get_table();
                table.set_header(vec!["Property", "Required", "Value"]);
                for key in form.properties.keys() {
                    table.add_row(vec![
                        key.clone(),
                        yes_no(form.required.contains(key)),
                        display_value(form.value(key)),
                    ]);
                }
                let title = form.title.as_deref().unwrap_or("Importer form");
                Some(format!("{title}\n{table}"))
            }
            MapperOutput::ImporterSaved { operation, result } => {
                if result.is_rejected() {
                    return Some(messages(&result.errors));
                }
                Some(format!(
                    "{operation}: importer {} ({})",
                    result.id.map(|id| id.to_string()).unwrap_or_else(na),
                    or_na(result.code.as_deref())
                ))
            }
            MapperOutput::Mutation { operation, outcome } => {
                let mut lines = vec![format!(
                    "{operation}: importer {}",
                    outcome.id.map(|id| id.to_string()).unwrap_or_else(na)
                )];
                for (label, list) in [
                    ("error", &outcome.errors),
                    ("warning", &outcome.warnings),
                    ("info", &outcome.info),
                ] {
                    lines.extend(list.iter().map(|message| format!("{label}: {message}")));
                }
                Some(lines.join("\n"))
            }
            MapperOutput::Mappings(list) => {
                if list.mappings.is_empty() {
                    return Some("This importer has no mapping rules.".to_string());
                }
                let mut table = get_table();
                table.set_header(vec!["Id", "Group", "Type", "Source", "Destination", "Refineries"]);
                for rule in &list.mappings {
                    table.add_row(vec![
                        rule.id.map(|id| id.to_string()).unwrap_or_else(na),
                        rule.group_id.map(|id| id.to_string()).unwrap_or_else(na),
                        or_na(rule.rule_type.as_deref()),
                        or_na(rule.source.as_deref()),
                        or_na(rule.destination.as_deref()),
                        rule.refineries
                            .iter()
                            .map(|refinery| refinery.refinery.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    ]);
                }
                Some(table.to_string())
            }
            MapperOutput::Bundles(bundles) => {
                let mut table = get_table();
                table.set_header(vec!["Code", "Name", "Type", "Data type", "Subelements"]);
                for bundle in bundles {
                    table.add_row(vec![
                        bundle.code.clone(),
                        or_na(bundle.name.as_deref()),
                        or_na(bundle.bundle_type.as_deref()),
                        or_na(bundle.data_type.as_deref()),
                        bundle
                            .subelements
                            .iter()
                            .map(|element| element.code.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    ]);
                }
                Some(table.to_string())
            }
            MapperOutput::BundleMatches(lookup) => {
                let mut table = get_table();
                table.set_header(vec!["Code", "Name", "Description"]);
                for found in &lookup.matches {
                    table.add_row(vec![
                        found.code.clone(),
                        or_na(found.name.as_deref()),
                        or_na(found.description.as_deref()),
                    ]);
                }
                Some(table.to_string())
            }
            MapperOutput::Settings(projection) => {
                let mut table = get_table();
                table.set_header(vec!["Setting", "Required", "Value"]);
                for (key, value) in &projection.values {
                    table.add_row(vec![
                        key.clone(),
                        yes_no(projection.schema.required.contains(key)),
                        display_value(Some(value)),
                    ]);
                }
                Some(table.to_string())
            }
            MapperOutput::SettingsSaved(outcome) => {
                if outcome.result.is_rejected() {
                    return Some(messages(&outcome.result.errors));
                }
                Some(format!(
                    "saved settings of importer {}",
                    outcome.result.id.map(|id| id.to_string()).unwrap_or_else(na)
                ))
            }
            MapperOutput::Profiles(profiles) => {
                if profiles.is_empty() {
                    return Some("No profiles found.".to_string());
                }
                Some(profiles.join("\n"))
            }
            MapperOutput::Profile {
                name,
                endpoint,
                token,
                default_table,
            } => Some(format!(
                "{name}\nendpoint: {endpoint}\ntoken: {}\ndefault table: {default_table}",
                token.as_deref().unwrap_or("(none)")
            )),
            MapperOutput::EmptySuccess => None,
        }
    }

    pub fn get_json(&self) -> Value {
        json!({ "data": self.get_data_json(), "error": null })
    }

    /// The `data` half of the JSON envelope.
    pub fn get_data_json(&self) -> Value {
        match self {
            MapperOutput::Importers(importers) => json!({ "importers": importers }),
            MapperOutput::ImporterForm(form) => json!(form),
            MapperOutput::ImporterSaved { result, .. } => json!(result),
            MapperOutput::Mutation { outcome, .. } => json!(outcome),
            MapperOutput::Mappings(list) => json!(list),
            MapperOutput::Bundles(bundles) => json!({ "bundles": bundles }),
            MapperOutput::BundleMatches(lookup) => json!(lookup),
            MapperOutput::Settings(projection) => json!(projection),
            MapperOutput::SettingsSaved(outcome) => json!({
                "result": outcome.result,
                "importers": outcome.importers,
            }),
            MapperOutput::Profiles(profiles) => json!({ "profiles": profiles }),
            MapperOutput::Profile {
                name,
                endpoint,
                token,
                default_table,
            } => json!({
                "name": name,
                "endpoint": endpoint,
                "token": token,
                "default_table": default_table,
            }),
            MapperOutput::EmptySuccess => json!({}),
        }
    }

    /// The rejection carried by a mutation result, if the service refused it.
    pub fn rejection(&self) -> Option<MutationRejected> {
        let (operation, errors) = match self {
            MapperOutput::ImporterSaved { operation, result } => (*operation, &result.errors),
            MapperOutput::Mutation { operation, outcome } => (*operation, &outcome.errors),
            MapperOutput::SettingsSaved(outcome) => ("save", &outcome.result.errors),
            _ => return None,
        };
        if errors.is_empty() {
            return None;
        }
        Some(MutationRejected {
            operation,
            messages: errors.iter().map(ToString::to_string).collect(),
        })
    }

    pub fn print(&self, format: FormatType) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match format {
            FormatType::Plain => {
                if let Some(text) = self.get_stdout() {
                    writeln!(stdout, "{text}")?;
                }
            }
            FormatType::Json => writeln!(stdout, "{}", self.get_json())?,
        }
        Ok(())
    }
}

fn get_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn na() -> String {
    "N/A".to_string()
}

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => na(),
    }
}

fn yes_no(flag: bool) -> String {
    let answer = if flag { "yes" } else { "no" };
    answer.to_string()
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn messages(errors: &[ServiceMessage]) -> String {
    errors
        .iter()
        .map(|error| format!("error: {error}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use mapper_client::shared::MutationOutcome;
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    fn importer(id: i64, code: &str) -> ImporterDescriptor {
        ImporterDescriptor {
            id,
            name: None,
            code: Some(code.to_string()),
            table: Some("ca_objects".to_string()),
            formats: vec!["csv".to_string(), "xlsx".to_string()],
            source: None,
        }
    }

    #[test]
    fn importers_render_as_a_table() {
        let output = MapperOutput::Importers(vec![importer(1, "objects_csv")]);
        let stdout = output.get_stdout().unwrap();
        assert_that!(stdout).contains("objects_csv");
        assert_that!(stdout).contains("csv, xlsx");
        assert_that!(stdout).contains("N/A");
    }

    #[test]
    fn json_output_wraps_data() {
        let output = MapperOutput::Importers(vec![importer(1, "objects_csv")]);
        let json = output.get_json();
        assert_eq!(json["data"]["importers"][0]["code"], json!("objects_csv"));
        assert_eq!(json["error"], Value::Null);
    }

    #[test]
    fn rejected_mutations_are_detected() {
        let outcome: MutationOutcome = serde_json::from_value(json!({
            "id": 3,
            "errors": [{ "message": "Importer is in use" }]
        }))
        .unwrap();
        let output = MapperOutput::Mutation {
            operation: "delete",
            outcome,
        };
        let rejection = output.rejection().unwrap();
        assert_that!(rejection.operation).is_equal_to("delete");
        assert_that!(rejection.messages).is_equal_to(vec!["Importer is in use".to_string()]);
        assert_that!(output.get_stdout().unwrap()).contains("error: Importer is in use");
    }

    #[test]
    fn successful_mutations_carry_no_rejection() {
        let output = MapperOutput::Mutation {
            operation: "deleteMapping",
            outcome: MutationOutcome::default(),
        };
        assert_that!(output.rejection()).is_none();
        assert_that!(MapperOutput::EmptySuccess.get_stdout()).is_none();
    }
}
