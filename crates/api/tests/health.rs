//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use hmis_store::seed;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health reports status, version and per-resource counts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_resource_counts() {
    let app =
        common::build_test_app_with(common::test_config(), seed::demo_store(chrono::Utc::now()));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["resources"]["comments"], 3);
    assert_eq!(json["resources"]["spaces"], 3);
    assert_eq!(json["resources"]["organisation_profiles"], 2);
    assert_eq!(json["resources"]["organisation_locations"], 3);
}

#[tokio::test]
async fn health_check_does_not_require_tenant() {
    let app = common::build_test_app();
    let response = common::send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns the structured not-found payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_e30004() {
    let app = common::build_test_app();
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "E30004");
    assert_eq!(json["context"]["resource"], "route");
    assert_eq!(json["context"]["id"], "/this-route-does-not-exist");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app();
    let response = get(&app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight allows the tenant header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_tenant_header() {
    let app = common::build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/spaces")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type,x-tenant-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );

    let allow_methods = headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allow_methods.contains("PATCH"), "got: {allow_methods}");

    let allow_headers = headers
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allow_headers.contains("x-tenant-id"), "got: {allow_headers}");
}

// ---------------------------------------------------------------------------
// Test: Wrong method on a known path returns the structured 405 payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_method_returns_405_e30007() {
    let app = common::build_test_app();
    let response = common::send(
        &app,
        Method::PUT,
        "/api/v1/spaces/abc",
        Some(common::TENANT),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "E30007");
    assert_eq!(json["meta"]["status"], 405);
    assert_eq!(json["context"]["method"], "PUT");
    assert_eq!(json["context"]["path"], "/api/v1/spaces/abc");
}

#[tokio::test]
async fn wrong_method_on_health_returns_405() {
    let app = common::build_test_app();
    let response = common::send(&app, Method::DELETE, "/health", None, None).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["code"], "E30007");
}

// ---------------------------------------------------------------------------
// Test: A request slower than the timeout returns the structured 408 payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_request_returns_408_e30008() {
    let mut config = common::test_config();
    config.latency_ms = 1500;
    config.request_timeout_secs = 1;
    let app = common::build_test_app_with(config, hmis_store::Store::new());

    let response = get(&app, "/api/v1/spaces").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "E30008");
    assert_eq!(json["meta"]["status"], 408);
    assert_eq!(json["context"]["timeoutSecs"], 1);
}
