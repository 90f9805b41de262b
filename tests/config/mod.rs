use assert_cmd::Command;
use assert_fs::TempDir;
use camino::Utf8PathBuf;
use predicates::prelude::*;

use mapper_config::{Config, Profile};

const CUSTOM_PROFILE: &str = "custom-profile";
const CUSTOM_TOKEN: &str = "custom-token-0123456789";

fn mapper(home: &Utf8PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("mapper").unwrap();
    cmd.env("MAPPER_CONFIG_HOME", home.as_str())
        .env("NO_COLOR", "1")
        .env_remove("MAPPER_ENDPOINT")
        .env_remove("MAPPER_KEY")
        .env_remove("MAPPER_PROFILE");
    cmd
}

fn get_temp_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, path)
}

#[test]
fn it_can_list_no_profiles() {
    let (_guard, home) = get_temp_dir();
    mapper(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles"));
}

#[test]
fn it_can_set_and_list_a_profile() {
    let (_guard, home) = get_temp_dir();
    mapper(&home)
        .args([
            "--profile",
            CUSTOM_PROFILE,
            "config",
            "set",
            "--endpoint",
            "http://localhost:8080/service/graphql",
            "--token",
            CUSTOM_TOKEN,
            "--table",
            "ca_entities",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved profile"));

    let config = Config::new(Some(&home), None, None).unwrap();
    let profile = Profile::load(CUSTOM_PROFILE, &config).unwrap();
    assert_eq!(profile.default_table, "ca_entities");

    mapper(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(CUSTOM_PROFILE));
}

#[test]
fn show_masks_the_token() {
    let (_guard, home) = get_temp_dir();
    let config = Config::new(Some(&home), None, None).unwrap();
    Profile {
        endpoint: Some("http://localhost:8080/service/graphql".to_string()),
        ..Profile::default()
    }
    .save(CUSTOM_PROFILE, &config)
    .unwrap();
    Profile::set_token(CUSTOM_PROFILE, &config, CUSTOM_TOKEN).unwrap();

    mapper(&home)
        .args(["--profile", CUSTOM_PROFILE, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cust******************6789"))
        .stdout(predicate::str::contains(CUSTOM_TOKEN).not());
}

#[test]
fn a_missing_profile_explains_how_to_fix_it() {
    let (_guard, home) = get_temp_dir();
    mapper(&home)
        .args(["--profile", "nowhere", "importer", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E006]"))
        .stderr(predicate::str::contains("mapper config set --profile nowhere"));
}

#[test]
fn it_can_delete_a_profile() {
    let (_guard, home) = get_temp_dir();
    let config = Config::new(Some(&home), None, None).unwrap();
    Profile::default().save(CUSTOM_PROFILE, &config).unwrap();

    mapper(&home)
        .args(["--profile", CUSTOM_PROFILE, "config", "delete"])
        .assert()
        .success();
    assert!(Profile::list(&config).unwrap().is_empty());
}
