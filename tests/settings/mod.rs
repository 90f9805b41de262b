use assert_fs::TempDir;
use httpmock::{Method::POST, MockServer};
use predicates::prelude::*;
use serde_json::json;

use crate::importer::mapper;

fn mock_form(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .json_body_includes(json!({ "operationName": "ImporterFormQuery" }).to_string());
        then.status(200).json_body(json!({
            "data": {
                "importerForm": {
                    "title": "Importer",
                    "required": [],
                    "properties": json!({
                        "ca_data_importers.importer_code": { "type": "string" },
                        "setting_inputFormats": { "type": "array" },
                        "setting_numInitialRowsToSkip": { "type": "integer" }
                    }).to_string(),
                    "uiSchema": null,
                    "values": json!({
                        "ca_data_importers.importer_code": "objects_csv",
                        "ca_data_importers.table_num": 57,
                        "setting_inputFormats": ["csv"],
                        "setting_numInitialRowsToSkip": 1
                    }).to_string()
                }
            }
        }));
    });
}

#[test]
fn show_prints_only_settings() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    mock_form(&server);

    mapper(&server, &home)
        .args(["settings", "show", "--id", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("setting_numInitialRowsToSkip"))
        .stdout(predicate::str::contains("ca_data_importers.importer_code").not());
}

#[test]
fn save_sends_the_fixed_record_policy() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    mock_form(&server);
    let edit = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body_includes(
            json!({
                "operationName": "ImporterEditMutation",
                "variables": {
                    "id": 4,
                    "code": "objects_csv",
                    "type": 57,
                    "table": "ca_objects",
                    "formats": ["csv"],
                    "settings": [
                        { "code": "numInitialRowsToSkip", "value": "3" },
                        { "code": "existingRecordPolicy", "value": "skip_on_idno" }
                    ]
                }
            })
            .to_string(),
        );
        then.status(200).json_body(json!({
            "data": { "edit": { "id": 4, "code": "objects_csv", "errors": [] } }
        }));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .json_body_includes(json!({ "operationName": "ImporterListQuery" }).to_string());
        then.status(200)
            .json_body(json!({ "data": { "list": [{ "id": 4, "code": "objects_csv" }] } }));
    });

    mapper(&server, &home)
        .args([
            "settings",
            "save",
            "--id",
            "4",
            "--set",
            "setting_numInitialRowsToSkip=3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved settings of importer 4"));
    edit.assert();
}

#[test]
fn save_refuses_unknown_settings() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    mock_form(&server);

    mapper(&server, &home)
        .args(["settings", "save", "--id", "4", "--set", "setting_bogus=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E010]"));
}
