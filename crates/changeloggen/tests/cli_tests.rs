//! End-to-end tests for the changeloggen binary.
//!
//! The binary is pointed at a mock GitHub API through `GITHUB_API_URL` and
//! run inside a temporary working directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn changeloggen(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("changeloggen").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CHANGELOGGEN_OWNER")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_rate_limit(server: &MockServer, remaining: u64) {
    let bucket = json!({ "limit": 5000, "used": 5000 - remaining, "remaining": remaining, "reset": 4_102_444_800_i64 });
    mount_json(
        server,
        "/rate_limit",
        json!({ "resources": { "core": bucket }, "rate": bucket }),
    )
    .await;
}

#[test]
fn test_missing_owner_is_fatal() {
    let dir = TempDir::new().unwrap();
    changeloggen(&dir)
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing CHANGELOGGEN_OWNER envvar"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_token_is_fatal() {
    let dir = TempDir::new().unwrap();
    changeloggen(&dir)
        .env("CHANGELOGGEN_OWNER", "exyll")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing GITHUB_TOKEN envvar"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exhausted_rate_limit_exits_cleanly() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 0).await;
    let dir = TempDir::new().unwrap();

    changeloggen(&dir)
        .env("CHANGELOGGEN_OWNER", "exyll")
        .env("GITHUB_TOKEN", "ghp_test")
        .env("GITHUB_API_URL", server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rate limit exceeded, resets in"))
        .stdout(predicate::str::contains("Fetching repositories...").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generates_widgets_changelog() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 4999).await;
    mount_json(
        &server,
        "/orgs/exyll/repos",
        json!([{ "id": 1, "name": "widgets", "full_name": "exyll/widgets" }]),
    )
    .await;
    mount_json(
        &server,
        "/repos/exyll/widgets/releases",
        json!([{
            "tag_name": "1.2.0",
            "published_at": "2023-03-14T10:00:00Z",
            "body": "Raw notes",
            "html_url": "https://github.com/exyll/widgets/releases/tag/1.2.0",
            "prerelease": false,
            "draft": false
        }]),
    )
    .await;
    mount_json(
        &server,
        "/repos/exyll/widgets/milestones",
        json!([{ "id": 900, "number": 3, "title": "1.2.0", "state": "closed" }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/repos/exyll/widgets/issues"))
        .and(query_param("milestone", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "number": 42,
            "title": "Fix crash",
            "html_url": "https://github.com/exyll/widgets/issues/42",
            "state": "open",
            "milestone": { "id": 900, "number": 3, "title": "1.2.0" },
            "labels": [{ "id": 1, "name": "bug" }]
        }])))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    changeloggen(&dir)
        .env("CHANGELOGGEN_OWNER", "exyll")
        .env("GITHUB_TOKEN", "ghp_test")
        .env("GITHUB_API_URL", server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing widgets..."))
        .stdout(predicate::str::contains("Writing widgets.v1.md..."));

    let doc = fs::read_to_string(dir.path().join("widgets.v1.md")).unwrap();
    assert!(doc.contains("- [1.2.0](#120) - Tuesday, 14 March 2023"));
    assert!(doc.contains("## 1.2.0"));
    assert!(doc.contains("#### bugs"));
    assert!(doc.contains("- #42 (https://github.com/exyll/widgets/issues/42) Fix crash"));

    // A second run finds the file and leaves it alone.
    changeloggen(&dir)
        .env("CHANGELOGGEN_OWNER", "exyll")
        .env("GITHUB_TOKEN", "ghp_test")
        .env("GITHUB_API_URL", server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Skipping, file widgets.v1.md already exists",
        ));
    assert_eq!(
        fs::read_to_string(dir.path().join("widgets.v1.md")).unwrap(),
        doc
    );
}
