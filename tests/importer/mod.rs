use assert_cmd::Command;
use assert_fs::TempDir;
use httpmock::{Method::POST, MockServer};
use predicates::prelude::*;
use serde_json::json;

/// Runs mapper against `server` with a throwaway config home.
pub(crate) fn mapper(server: &MockServer, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mapper").unwrap();
    cmd.env("MAPPER_CONFIG_HOME", home.path())
        .env("MAPPER_ENDPOINT", server.url("/graphql"))
        .env("NO_COLOR", "1")
        .env_remove("MAPPER_KEY")
        .env_remove("MAPPER_PROFILE");
    cmd
}

#[test]
fn it_lists_importers() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("authorization", "Bearer env-token")
            .json_body_includes(json!({ "operationName": "ImporterListQuery" }).to_string());
        then.status(200).json_body(json!({
            "data": {
                "list": [
                    { "id": 1, "name": "Objects from CSV", "code": "objects_csv", "table": "ca_objects", "formats": ["csv"], "source": null }
                ]
            }
        }));
    });

    mapper(&server, &home)
        .env("MAPPER_KEY", "env-token")
        .args(["importer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("objects_csv"));
    mock.assert();
}

#[test]
fn it_prints_json_when_asked() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({
            "data": { "list": [{ "id": 9, "code": "people" }] }
        }));
    });

    let output = mapper(&server, &home)
        .args(["importer", "list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["data"]["importers"][0]["id"], json!(9));
    assert_eq!(printed["error"], serde_json::Value::Null);
}

#[test]
fn rejected_deletes_fail_the_command() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .json_body_includes(json!({ "operationName": "ImporterDeleteMutation" }).to_string());
        then.status(200).json_body(json!({
            "data": {
                "delete": { "id": 3, "errors": [{ "message": "Importer is in use" }], "warnings": [], "info": [] }
            }
        }));
    });

    mapper(&server, &home)
        .args(["importer", "delete", "--id", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("error: Importer is in use"))
        .stderr(predicate::str::contains("error[E009]"));
}

#[test]
fn rejected_deletes_print_one_json_envelope() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .json_body_includes(json!({ "operationName": "ImporterDeleteMutation" }).to_string());
        then.status(200).json_body(json!({
            "data": {
                "delete": { "id": 7, "errors": [{ "message": "Importer is in use" }], "warnings": [], "info": [] }
            }
        }));
    });

    let output = mapper(&server, &home)
        .args(["importer", "delete", "--id", "7", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["data"]["id"], json!(7));
    assert_eq!(printed["data"]["errors"][0]["message"], json!("Importer is in use"));
    assert_eq!(printed["error"]["code"], json!("E009"));
}

#[test]
fn missing_result_fields_are_reported() {
    let server = MockServer::start();
    let home = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({ "data": {} }));
    });

    mapper(&server, &home)
        .args(["mapping", "list", "--id", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E004]"))
        .stderr(predicate::str::contains("listMappings"));
}
