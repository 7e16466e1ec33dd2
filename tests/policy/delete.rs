use assert_fs::TempDir;
use httpmock::{Method::POST, MockServer};
use predicates::prelude::*;
use serde_json::{Value, json};

use super::warden;

#[test]
fn it_deletes_without_asking_when_told_yes() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body_includes(
            json!({
                "operationName": "PolicyDeleteMutation",
                "variables": { "input": { "policies": [{ "id": "p-1" }, { "id": "p-2" }] } }
            })
            .to_string(),
        );
        then.status(200)
            .json_body(json!({ "data": { "deletePolicy": true } }));
    });

    warden(&home, &server)
        .args(["policy", "delete", "p-1", "p-2", "p-1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p-1\np-2"));

    mock.assert();
}

#[test]
fn declining_the_prompt_sends_nothing() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(json!({ "data": { "deletePolicy": true } }));
    });

    warden(&home, &server)
        .args(["policy", "delete", "p-1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Are you sure you want to delete policy p-1? [y/N]"))
        .stderr(predicate::str::contains("cancelled"));

    mock.assert_calls(0);
}

#[test]
fn a_rejected_delete_fails_as_json() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(json!({ "data": { "deletePolicy": false } }));
    });

    let output = warden(&home, &server)
        .args(["policy", "delete", "p-1", "--yes", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["success"], false);
    assert_eq!(json["error"]["code"], "E005");
}

#[test]
fn unauthorized_errors_point_at_the_key() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(json!({
            "data": null,
            "errors": [{
                "errorType": "UnauthorizedException",
                "message": "You are not authorized to make this call."
            }]
        }));
    });

    warden(&home, &server)
        .args(["policy", "delete", "p-1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E001]"));
}

#[test]
fn blank_ids_are_not_sent() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(json!({ "data": { "deletePolicy": true } }));
    });

    warden(&home, &server)
        .args(["policy", "delete", "", "   ", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E004]"));

    mock.assert_calls(0);
}
