//! End-to-end downloads against a mock GitHub API

use super::common::ghfetch_command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run_ghfetch(api_url: String, args: Vec<String>, stdin: &'static str) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || {
        ghfetch_command()
            .env("GHFETCH_API_URL", api_url)
            .args(args)
            .write_stdin(stdin)
            .assert()
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_latest_release_single_asset() {
    let server = MockServer::start().await;
    let asset_url = format!("{}/downloads/v1.0.0/tool.tar.gz", server.uri());

    Mock::given(method("GET"))
        .and(path("/repos/octo/tool/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": "v1.0.0",
            "assets": [{"name": "tool.tar.gz", "browser_download_url": asset_url}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/downloads/v1.0.0/tool.tar.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"archive-bytes".to_vec()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let args = vec![
        "https://github.com/octo/tool".to_string(),
        "--no-token".to_string(),
        "--no-progress".to_string(),
        "-o".to_string(),
        temp.path().display().to_string(),
    ];

    run_ghfetch(server.uri(), args, "")
        .await
        .success()
        .stdout(predicate::str::contains("Saved"));

    let saved = std::fs::read(temp.path().join("tool.tar.gz")).unwrap();
    assert_eq!(saved, b"archive-bytes");
}

#[tokio::test]
async fn test_token_from_stdin_is_sent_to_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/private"))
        .and(header("authorization", "token ghp_stdin"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/private/releases/latest"))
        .and(header("authorization", "token ghp_stdin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": "v3",
            "assets": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let args = vec![
        "https://github.com/octo/private".to_string(),
        "--token-stdin".to_string(),
    ];

    run_ghfetch(server.uri(), args, "ghp_stdin\n")
        .await
        .code(4)
        .stdout(predicate::str::contains("is accessible"))
        .stderr(predicate::str::contains("No assets found in the latest release (v3)"));
}

#[tokio::test]
async fn test_repository_not_found_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/gone/releases/latest"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let args = vec![
        "https://github.com/octo/gone".to_string(),
        "--no-token".to_string(),
    ];

    run_ghfetch(server.uri(), args, "")
        .await
        .code(3)
        .stderr(predicate::str::contains("Repository not found: octo/gone"));
}
