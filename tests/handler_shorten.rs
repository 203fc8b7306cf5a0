mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

fn server_with_probe() -> (TestServer, Arc<common::StubProbe>) {
    let probe = Arc::new(common::default_probe());
    let state = common::create_test_state(probe.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();
    (server, probe)
}

#[tokio::test]
async fn test_shorten_generates_code() {
    let (server, _probe) = server_with_probe();

    let response = server
        .post("/shorten_url")
        .json(&json!({ "original_url": "https://www.example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
}

#[tokio::test]
async fn test_shorten_with_requested_code() {
    let (server, _probe) = server_with_probe();

    let response = server
        .post("/shorten_url")
        .add_query_param("short_url", "test_url")
        .json(&json!({ "original_url": "https://www.example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "short_code": "test_url" }));
}

#[tokio::test]
async fn test_shorten_requested_code_conflict() {
    let (server, _probe) = server_with_probe();

    server
        .post("/shorten_url")
        .add_query_param("short_url", "test_url")
        .json(&json!({ "original_url": "https://www.example.com" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten_url")
        .add_query_param("short_url", "test_url")
        .json(&json!({ "original_url": "https://www.example.com" }))
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "detail": "Short URL 'test_url' already exists." }));
}

#[tokio::test]
async fn test_shorten_conflict_regardless_of_url() {
    let (server, _probe) = server_with_probe();

    server
        .post("/shorten_url")
        .add_query_param("short_url", "shared")
        .json(&json!({ "original_url": "https://www.example.com" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten_url")
        .add_query_param("short_url", "shared")
        .json(&json!({ "original_url": "https://www.target.com" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "Short URL 'shared' already exists."
    );
}

#[tokio::test]
async fn test_shorten_missing_scheme_skips_probe() {
    let (server, probe) = server_with_probe();

    for url in ["www.example.com", "google.com", "target.com"] {
        let response = server
            .post("/shorten_url")
            .json(&json!({ "original_url": url }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "detail": "Value must start 'http://' or 'https://'" }));
    }

    assert_eq!(probe.calls(), 0);
}

#[tokio::test]
async fn test_shorten_unreachable_url() {
    let (server, probe) = server_with_probe();

    let urls = [
        "https://www.cooom.com",
        "https://www.test.cooom.com",
        "https://www.nonexistentwebsite1234567890.com",
        "https://www.exmaple.com",
    ];
    for url in urls {
        let response = server
            .post("/shorten_url")
            .json(&json!({ "original_url": url }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "detail": "Invalid URL" }));
    }

    assert_eq!(probe.calls(), urls.len());
}

#[tokio::test]
async fn test_shorten_error_status_is_rejected() {
    let (server, _probe) = server_with_probe();

    for url in ["https://gone.example.com", "https://broken.example.com"] {
        let response = server
            .post("/shorten_url")
            .json(&json!({ "original_url": url }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<serde_json::Value>()["detail"], "Invalid URL");
    }
}

#[tokio::test]
async fn test_shorten_informational_status_is_not_found() {
    let (server, _probe) = server_with_probe();

    let response = server
        .post("/shorten_url")
        .json(&json!({ "original_url": "https://switching.example.com" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["detail"], "Invalid URL");
}

#[tokio::test]
async fn test_rejected_url_is_not_stored() {
    let (server, _probe) = server_with_probe();

    server
        .post("/shorten_url")
        .add_query_param("short_url", "never")
        .json(&json!({ "original_url": "https://gone.example.com" }))
        .await
        .assert_status_bad_request();

    server.get("/redirect/never").await.assert_status_not_found();
    server.get("/list_urls").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_invalid_body() {
    let (server, probe) = server_with_probe();

    let response = server
        .post("/shorten_url")
        .json(&json!({ "url": "https://www.example.com" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<serde_json::Value>()["detail"].is_string());
    assert_eq!(probe.calls(), 0);
}

#[tokio::test]
async fn test_shorten_without_json_content_type() {
    let (server, _probe) = server_with_probe();

    let response = server
        .post("/shorten_url")
        .text(r#"{ "original_url": "https://www.example.com" }"#)
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(response.json::<serde_json::Value>()["detail"].is_string());
    server.get("/list_urls").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_url_with_newline_is_malformed() {
    let stub = Arc::new(common::StubProbe::new().with_status("https://www.exa\nmple.com", 200));
    let state = common::create_test_state(stub.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/shorten_url")
        .add_query_param("short_url", "strasse")
        .json(&json!({ "original_url": "https://www.exa\nmple.com" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "detail": "Value must start 'http://' or 'https://'" }));
    assert_eq!(stub.calls(), 0);

    server.get("/redirect/strasse").await.assert_status_not_found();
}
