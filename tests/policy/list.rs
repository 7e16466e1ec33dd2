use assert_fs::TempDir;
use httpmock::{Method::POST, MockServer};
use predicates::prelude::*;
use serde_json::{Value, json};

use super::{API_KEY, warden};

fn list_response(this_page: i64) -> Value {
    json!({
        "data": {
            "listPolicies": {
                "paging": { "thisPage": this_page, "totalPages": 2, "totalItems": 3 },
                "policies": [
                    {
                        "id": "AWS.S3.Bucket.Encryption",
                        "displayName": "S3 buckets are encrypted",
                        "complianceStatus": "FAIL",
                        "enabled": true,
                        "lastModified": "2024-03-01T12:30:00Z",
                        "resourceTypes": ["AWS.S3.Bucket"],
                        "severity": "HIGH",
                        "tags": ["pci"]
                    },
                    {
                        "id": "Custom.Everything",
                        "displayName": null,
                        "complianceStatus": "PASS",
                        "enabled": false,
                        "lastModified": "2024-02-01T08:00:00Z",
                        "resourceTypes": [],
                        "severity": "LOW",
                        "tags": []
                    }
                ]
            }
        }
    })
}

#[test]
fn it_lists_policies_sorted_by_the_requested_column() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("x-api-key", API_KEY)
            .json_body_includes(
                json!({
                    "operationName": "PolicyListQuery",
                    "variables": {
                        "input": {
                            "sortBy": "severity",
                            "sortDir": "ascending",
                            "severity": "HIGH",
                            "tags": "pci,sox"
                        }
                    }
                })
                .to_string(),
            );
        then.status(200).json_body(list_response(1));
    });

    warden(&home, &server)
        .args([
            "policy", "list", "--sort-by", "severity", "--sort-dir", "asc", "--severity", "high",
            "--tag", "pci", "--tag", "sox",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Severity ▲"))
        .stdout(predicate::str::contains("Last Modified ▼").not())
        .stdout(predicate::str::contains("All resources"))
        .stdout(predicate::str::contains("DISABLED"))
        .stdout(predicate::str::contains("2024-03-01 12:30:00 UTC"))
        .stdout(predicate::str::contains("Page 1/2 (3 policies total)"));

    mock.assert();
}

#[test]
fn it_lists_policies_as_json() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(list_response(1));
    });

    let output = warden(&home, &server)
        .args(["policy", "list", "--format", "json"])
        .output()
        .unwrap();
    mock.assert();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["success"], true);
    assert_eq!(
        json["data"]["sort"],
        json!({ "field": "last-modified", "direction": "descending" })
    );
    assert_eq!(json["data"]["policies"][0]["id"], "AWS.S3.Bucket.Encryption");
    assert_eq!(json["data"]["paging"]["total_pages"], 2);
}

#[test]
fn it_rejects_unknown_sort_fields_before_sending_anything() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200).json_body(list_response(1));
    });

    warden(&home, &server)
        .args(["policy", "list", "--sort-by", "owner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'owner' is not a valid sort field"));

    mock.assert_calls(0);
}

#[test]
fn interactive_mode_refetches_once_per_command() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let initial = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body_includes(
            json!({ "variables": { "input": { "sortBy": "lastModified", "sortDir": "descending" } } })
                .to_string(),
        );
        then.status(200).json_body(list_response(1));
    });
    let by_severity = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body_includes(
            json!({ "variables": { "input": { "sortBy": "severity", "sortDir": "ascending", "page": 1 } } })
                .to_string(),
        );
        then.status(200).json_body(list_response(1));
    });
    let next_page = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body_includes(
            json!({ "variables": { "input": { "sortBy": "severity", "sortDir": "ascending", "page": 2 } } })
                .to_string(),
        );
        then.status(200).json_body(list_response(2));
    });

    warden(&home, &server)
        .args(["policy", "list", "--interactive"])
        .write_stdin("severity\nbogus\nn\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Severity ▲"))
        .stdout(predicate::str::contains("'bogus' is not a valid sort field"))
        .stdout(predicate::str::contains("Page 2/2"));

    initial.assert_calls(1);
    by_severity.assert_calls(1);
    next_page.assert_calls(1);
}

#[test]
fn a_missing_endpoint_is_reported() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();

    warden(&home, &server)
        .env_remove("WARDEN_ENDPOINT")
        .args(["policy", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E018]"));
}
