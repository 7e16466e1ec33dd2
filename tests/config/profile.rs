use assert_cmd::Command;
use assert_fs::TempDir;
use camino::Utf8PathBuf;
use predicates::prelude::*;
use serde_json::Value;

use warden::utils::env::WardenEnvKey;
use warden_config::{Config, Profile};

const CUSTOM_PROFILE: &str = "custom-profile";
const CUSTOM_API_KEY: &str = "custom-api-key-1234";

fn warden(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("warden").unwrap();
    cmd.env(WardenEnvKey::ConfigHome.to_string(), home.path())
        .env_remove(WardenEnvKey::Key.to_string())
        .env_remove(WardenEnvKey::Endpoint.to_string())
        .env("NO_COLOR", "1");
    cmd
}

fn config(home: &TempDir) -> Config {
    let home = Utf8PathBuf::try_from(home.path().to_path_buf()).unwrap();
    Config::new(Some(&home), None, None).unwrap()
}

#[test]
fn it_can_list_no_profiles() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No profiles"));
}

#[test]
fn it_can_list_one_profile() {
    let home = TempDir::new().unwrap();
    Profile::set_api_key(CUSTOM_PROFILE, &config(&home), CUSTOM_API_KEY).unwrap();

    warden(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(CUSTOM_PROFILE));
}

#[test]
fn it_lists_profiles_as_json() {
    let home = TempDir::new().unwrap();
    Profile::set_api_key(CUSTOM_PROFILE, &config(&home), CUSTOM_API_KEY).unwrap();

    let output = warden(&home)
        .args(["config", "list", "--format", "json"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["json_version"], "1");
    assert_eq!(json["data"]["profiles"][0], CUSTOM_PROFILE);
    assert_eq!(json["data"]["success"], true);
    assert_eq!(json["error"], Value::Null);
}

#[test]
fn it_masks_the_key_when_showing_a_profile() {
    let home = TempDir::new().unwrap();
    let config = config(&home);
    Profile::set_api_key(CUSTOM_PROFILE, &config, CUSTOM_API_KEY).unwrap();
    Profile::set_endpoint(CUSTOM_PROFILE, &config, "https://console.example.com/graphql").unwrap();

    warden(&home)
        .args(["config", "show", CUSTOM_PROFILE])
        .assert()
        .success()
        .stdout(predicate::str::contains(CUSTOM_API_KEY).not())
        .stdout(predicate::str::contains("https://console.example.com/graphql"));
}

#[test]
fn it_can_delete_a_profile() {
    let home = TempDir::new().unwrap();
    let config = config(&home);
    Profile::set_api_key(CUSTOM_PROFILE, &config, CUSTOM_API_KEY).unwrap();

    warden(&home)
        .args(["config", "delete", CUSTOM_PROFILE])
        .assert()
        .success();
    assert!(Profile::list(&config).unwrap().is_empty());
}

#[test]
fn deleting_a_missing_profile_fails_with_a_code() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .args(["config", "delete", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E015]"));
}

#[test]
fn it_can_clear_every_profile() {
    let home = TempDir::new().unwrap();
    let config = config(&home);
    Profile::set_api_key("one", &config, CUSTOM_API_KEY).unwrap();
    Profile::set_api_key("two", &config, CUSTOM_API_KEY).unwrap();

    warden(&home).args(["config", "clear"]).assert().success();
    assert!(Profile::list(&config).unwrap().is_empty());
}
