//! Provider wrapper routes against a mocked provider

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use sportsync::{
    api::{sportmonks_router, SportmonksState},
    http::{build_client, RetryPolicy},
    sportmonks::{SportmonksClient, UpstreamService},
};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const TOKEN: &str = "test-token";

fn test_app(server: &MockServer) -> Router {
    let http = build_client(Duration::from_secs(5)).unwrap();
    let client = SportmonksClient::new(
        http,
        format!("{}/v3", server.uri()),
        TOKEN,
        RetryPolicy::none(),
    );
    sportmonks_router(SportmonksState::new(UpstreamService::new(client)))
}

async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_leagues_are_unwrapped_from_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/football/leagues"))
        .and(query_param("api_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 271, "sport_id": 1, "country_id": 320, "name": "Superliga",
                 "active": true, "type": "league", "has_jerseys": false},
                {"id": 501, "sport_id": 1, "name": "Premiership"}
            ],
            "pagination": {"count": 2, "per_page": 25, "current_page": 1, "has_more": false},
            "subscription": [],
            "rate_limit": {"resets_in_seconds": 3600, "remaining": 2999}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = get(&test_app(&server), "/leagues").await;

    assert_eq!(response.status(), StatusCode::OK);
    let leagues = body_json(response).await;
    assert_eq!(leagues.as_array().unwrap().len(), 2);
    assert_eq!(leagues[0]["name"], "Superliga");
    assert_eq!(leagues[0]["type"], "league");
    assert_eq!(leagues[1]["active"], true);
}

#[tokio::test]
async fn test_single_team_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/football/teams/85"))
        .and(query_param("api_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 85, "sport_id": 1, "country_id": 320, "venue_id": 1708,
                     "gender": "male", "name": "FC Copenhagen", "short_code": "FCK",
                     "founded": 1992, "type": "domestic", "placeholder": false}
        })))
        .mount(&server)
        .await;

    let response = get(&test_app(&server), "/teams/85").await;

    assert_eq!(response.status(), StatusCode::OK);
    let team = body_json(response).await;
    assert_eq!(team["name"], "FC Copenhagen");
    assert_eq!(team["founded"], 1992);
}

#[tokio::test]
async fn test_provider_error_surfaces_as_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/football/leagues/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "No result"})))
        .mount(&server)
        .await;

    let response = get(&test_app(&server), "/leagues/999").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["detail"], "Internal Server Error");
}

#[tokio::test]
async fn test_unexpected_shape_surfaces_as_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/football/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let response = get(&test_app(&server), "/teams").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_does_not_call_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let response = get(&test_app(&server), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "healthy"}));
}
