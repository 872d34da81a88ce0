//! HTTP-level integration tests for organisation profiles, locations and
//! randomized boundary checks.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{body_json, create, delete, get, patch_json, post_json, send};
use hmis_store::seed::{self, DEMO_ORGANISATION_ID, SECOND_ORGANISATION_ID};
use serde_json::{json, Value};

const PROFILES: &str = "/api/v1/organisations/profiles";

fn profile_body(code: &str) -> Value {
    json!({
        "name": "Siaya District Health Office",
        "code": code,
        "organisationType": "district",
        "country": "KE",
        "contactEmail": "dho@siaya.example.org",
    })
}

fn seeded_app() -> Router {
    common::build_test_app_with(common::test_config(), seed::demo_store(chrono::Utc::now()))
}

async fn boundary_checks(app: &Router, n: usize) -> Vec<Value> {
    let mut results = Vec::new();
    for _ in 0..n {
        let response = post_json(
            app,
            &format!("/api/v1/organisations/{DEMO_ORGANISATION_ID}/boundary-check"),
            json!({"latitude": -1.29, "longitude": 36.82}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        results.push(body_json(response).await["data"].clone());
    }
    results
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profiles_do_not_require_tenant_header() {
    let app = common::build_test_app();
    let response = send(&app, Method::GET, PROFILES, None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_profile_uses_id_field() {
    let app = common::build_test_app();
    let profile = create(&app, PROFILES, profile_body("SDHO")).await;

    assert!(profile["id"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(profile.get("uuid").is_none());
    assert_eq!(profile["organisationType"], "district");
    assert_eq!(profile["shortName"], Value::Null);
}

#[tokio::test]
async fn invalid_email_and_country_fail_validation() {
    let app = common::build_test_app();
    let mut body = profile_body("X");
    body["contactEmail"] = json!("not-an-email");
    body["country"] = json!("KEN");

    let response = post_json(&app, PROFILES, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "E30003");
    let error = json["context"]["error"].as_str().unwrap();
    assert!(error.contains("contactEmail") || error.contains("contact_email"));
}

#[tokio::test]
async fn profile_filter_by_type() {
    let app = seeded_app();
    let json = body_json(
        get(&app, &format!("{PROFILES}?filter%5BorganisationType%5D=facility")).await,
    )
    .await;

    assert_eq!(json["meta"]["pagination"]["total"], 1);
    assert_eq!(json["data"][0]["id"], SECOND_ORGANISATION_ID);
}

#[tokio::test]
async fn update_and_delete_profile() {
    let app = common::build_test_app();
    let profile = create(&app, PROFILES, profile_body("SDHO")).await;
    let url = format!("{PROFILES}/{}", profile["id"].as_str().unwrap());

    let response = patch_json(&app, &url, json!({"shortName": "Siaya DHO"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["shortName"], "Siaya DHO");
    assert_eq!(updated["code"], "SDHO");

    let response = delete(&app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn locations_are_scoped_to_organisation() {
    let app = seeded_app();

    let json = body_json(
        get(
            &app,
            &format!("/api/v1/organisations/{SECOND_ORGANISATION_ID}/locations"),
        )
        .await,
    )
    .await;
    assert_eq!(json["meta"]["pagination"]["total"], 2);
    for location in json["data"].as_array().unwrap() {
        assert_eq!(location["organisationId"], SECOND_ORGANISATION_ID);
    }
}

#[tokio::test]
async fn list_locations_of_unknown_organisation_returns_404() {
    let app = seeded_app();
    let response = get(&app, "/api/v1/organisations/ghost/locations").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "E30004");
    assert_eq!(json["context"]["resource"], "organisation_profiles");
    assert_eq!(json["context"]["id"], "ghost");
}

#[tokio::test]
async fn create_location_under_unknown_organisation_returns_404() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/organisations/ghost/locations",
        json!({"name": "Clinic", "latitude": 0.0, "longitude": 0.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "E30004");
    assert_eq!(json["context"]["resource"], "organisation_profiles");
}

#[tokio::test]
async fn out_of_range_latitude_fails_validation() {
    let app = seeded_app();
    let response = post_json(
        &app,
        &format!("/api/v1/organisations/{DEMO_ORGANISATION_ID}/locations"),
        json!({"name": "Nowhere", "latitude": 120.0, "longitude": 0.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "E30003");
}

#[tokio::test]
async fn location_crud_respects_parent_scope() {
    let app = seeded_app();
    let base = format!("/api/v1/organisations/{DEMO_ORGANISATION_ID}/locations");
    let location = create(
        &app,
        &base,
        json!({"name": "Field office", "latitude": -0.5, "longitude": 35.2}),
    )
    .await;
    let id = location["id"].as_str().unwrap();
    assert_eq!(location["isPrimary"], false);

    // Wrong parent: not found, and nothing changes.
    let wrong = format!("/api/v1/organisations/{SECOND_ORGANISATION_ID}/locations/{id}");
    let response = patch_json(&app, &wrong, json!({"name": "Moved"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = delete(&app, &wrong).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Right parent: update then delete.
    let url = format!("{base}/{id}");
    let response = patch_json(&app, &url, json!({"isPrimary": true, "latitude": -0.51})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["isPrimary"], true);
    assert_eq!(updated["latitude"], -0.51);
    assert_eq!(updated["name"], "Field office");

    let response = delete(&app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Location deleted successfully"
    );
    assert_eq!(get(&app, &url).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Boundary checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn boundary_checks_are_reproducible_with_the_same_seed() {
    let first = boundary_checks(&seeded_app(), 20).await;
    let second = boundary_checks(&seeded_app(), 20).await;
    assert_eq!(first, second);

    for check in &first {
        assert_eq!(check["organisationId"], DEMO_ORGANISATION_ID);
        let within = check["withinBoundary"].as_bool().unwrap();
        let distance = check["distanceKm"].as_f64().unwrap();
        if within {
            assert_eq!(distance, 0.0);
        } else {
            assert!(distance >= 0.1 && distance < 25.0);
        }
    }
}

#[tokio::test]
async fn boundary_check_for_unknown_organisation_returns_404() {
    let app = seeded_app();
    let response = post_json(
        &app,
        "/api/v1/organisations/ghost/boundary-check",
        json!({"latitude": 0.0, "longitude": 0.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn boundary_check_validates_coordinates() {
    let app = seeded_app();
    let response = post_json(
        &app,
        &format!("/api/v1/organisations/{DEMO_ORGANISATION_ID}/boundary-check"),
        json!({"latitude": 0.0, "longitude": 200.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "E30003");
}
