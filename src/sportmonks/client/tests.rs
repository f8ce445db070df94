//! Unit tests for the provider client

use super::*;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn test_client(base_url: &str) -> SportmonksClient {
    let http = crate::http::build_client(Duration::from_secs(5)).unwrap();
    SportmonksClient::new(http, base_url, "test_api_key", RetryPolicy::none())
}

#[tokio::test]
async fn test_get_includes_api_token_in_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/football/leagues"))
        .and(query_param("api_token", "test_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = test_client(&mock_server.uri())
        .get("football/leagues", &[])
        .await
        .unwrap();

    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_get_merges_additional_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/football/leagues"))
        .and(query_param("api_token", "test_api_key"))
        .and(query_param("include", "seasons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server.uri())
        .get("football/leagues", &[("include", "seasons")])
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_rejects_token_param_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server.uri())
        .get("football/leagues", &[("api_token", "other")])
        .await;

    match result {
        Err(ServiceError::ReservedParam(name)) => assert_eq!(name, "api_token"),
        other => panic!("Expected ReservedParam, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_trims_slashes_when_joining_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/football/teams/85"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 85}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&format!("{}/", mock_server.uri()));
    assert_eq!(client.base_url(), mock_server.uri());

    let body = client.get("/football/teams/85", &[]).await.unwrap();
    assert_eq!(body["data"]["id"], 85);
}

#[tokio::test]
async fn test_get_error_status_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/football/leagues"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})),
        )
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server.uri())
        .get("football/leagues", &[])
        .await;

    match result {
        Err(ServiceError::Http(err)) => {
            assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}
