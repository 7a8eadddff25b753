use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use orbx_api::router::build_router;
use orbx_auth_types::identity::MutationPolicy;
use orbx_testing::auth::MockAuth;

use crate::helpers::offline_state;

fn server(policy: MutationPolicy) -> TestServer {
    TestServer::new(build_router(offline_state(policy))).unwrap()
}

fn assert_error(body: &Value, kind: &str, message: &str) {
    assert_eq!(body["kind"], kind, "body: {body}");
    assert_eq!(body["message"], message, "body: {body}");
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_banner_and_liveness() {
    let server = server(MutationPolicy::Admin);

    let resp = server.get("/").await;
    resp.assert_status_ok();
    resp.assert_text("OrbX Backend is running!");

    server.get("/healthz").await.assert_status_ok();
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let server = server(MutationPolicy::Admin);
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

// ── Mutation access ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_write_without_token() {
    let server = server(MutationPolicy::Admin);

    let resp = server
        .post("/api/continents")
        .json(&json!({ "name": "Asia" }))
        .await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
    assert_error(&resp.json(), "UNAUTHORIZED", "missing bearer token");
}

#[tokio::test]
async fn should_reject_write_with_invalid_token() {
    let server = server(MutationPolicy::Admin);

    let resp = server
        .delete("/api/cities/1")
        .authorization_bearer("not-a-jwt")
        .await;

    resp.assert_status(StatusCode::FORBIDDEN);
    assert_error(&resp.json(), "FORBIDDEN", "invalid or expired token");
}

#[tokio::test]
async fn should_reject_plain_user_under_admin_policy() {
    let server = server(MutationPolicy::Admin);
    let (name, value) = MockAuth::user().bearer();

    let resp = server
        .post("/api/countries")
        .add_header(name, value)
        .json(&json!({ "name": "Japan", "isoCode": "JP", "continentId": 1 }))
        .await;

    resp.assert_status(StatusCode::FORBIDDEN);
    assert_error(&resp.json(), "FORBIDDEN", "admin role required");
}

#[tokio::test]
async fn should_let_plain_user_write_under_authenticated_policy() {
    let server = server(MutationPolicy::Authenticated);
    let (name, value) = MockAuth::user().bearer();

    let resp = server
        .post("/api/continents")
        .add_header(name, value)
        .json(&json!({ "name": "Asia" }))
        .await;

    // Past authorization and validation; the offline database then fails.
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_error(&resp.json(), "INTERNAL", "internal error");
}

// ── Validation before persistence ────────────────────────────────────────────

#[tokio::test]
async fn should_reject_malformed_path_id() {
    let server = server(MutationPolicy::Admin);
    let (name, value) = MockAuth::admin().bearer();

    let resp = server
        .put("/api/continents/abc")
        .add_header(name, value)
        .json(&json!({ "name": "Asia" }))
        .await;

    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "invalid id");

    let resp = server.get("/api/countries/0").await;
    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "invalid id");
}

#[tokio::test]
async fn should_reject_unknown_payload_field() {
    let server = server(MutationPolicy::Admin);
    let (name, value) = MockAuth::admin().bearer();

    let resp = server
        .post("/api/continents")
        .add_header(name, value)
        .json(&json!({ "name": "Asia", "capital": "Nowhere" }))
        .await;

    resp.assert_status_bad_request();
    assert_eq!(resp.json::<Value>()["kind"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn should_describe_wrongly_typed_field_in_plain_terms() {
    let server = server(MutationPolicy::Admin);
    let (name, value) = MockAuth::admin().bearer();

    let resp = server
        .post("/api/continents")
        .add_header(name, value)
        .json(&json!({ "name": "Asia", "population": true }))
        .await;

    resp.assert_status_bad_request();
    let body: Value = resp.json();
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("a string or a number"), "body: {body}");
    assert!(!message.contains("RawField"), "body: {body}");
}

#[tokio::test]
async fn should_reject_invalid_population_with_400() {
    let server = server(MutationPolicy::Admin);
    let (name, value) = MockAuth::admin().bearer();

    let resp = server
        .post("/api/cities")
        .add_header(name, value)
        .json(&json!({
            "name": "Tokyo",
            "latitude": 35.6,
            "longitude": 139.6,
            "population": "13,960,000",
            "countryId": 1
        }))
        .await;

    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "invalid population");
}

#[tokio::test]
async fn should_hide_database_failure_behind_internal_error() {
    let server = server(MutationPolicy::Admin);
    let (name, value) = MockAuth::admin().bearer();

    let resp = server
        .post("/api/continents")
        .add_header(name, value)
        .json(&json!({ "name": "Asia", "population": "4.700.000.000" }))
        .await;

    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_error(&resp.json(), "INTERNAL", "internal error");
}

#[tokio::test]
async fn should_reject_invalid_list_filter() {
    let server = server(MutationPolicy::Admin);

    let resp = server.get("/api/countries?continent=abc").await;
    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "invalid continent filter");

    let resp = server.get("/api/cities?country=-2").await;
    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "invalid country filter");
}

// ── Auth ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_validate_registration_payload() {
    let server = server(MutationPolicy::Admin);

    let resp = server
        .post("/auth/register")
        .json(&json!({ "name": "Ana", "password": "s3cret" }))
        .await;

    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "email required");
}

#[tokio::test]
async fn should_validate_login_payload() {
    let server = server(MutationPolicy::Admin);

    let resp = server
        .post("/auth/login")
        .json(&json!({ "email": "ana@example.com" }))
        .await;

    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "password required");
}

// ── External providers ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_require_coordinates_for_weather() {
    let server = server(MutationPolicy::Admin);

    let resp = server.get("/api/external/weather?lon=10").await;
    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "coordinates required");

    let resp = server.get("/api/external/weather?lat=95&lon=10").await;
    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "invalid coordinates");
}

#[tokio::test]
async fn should_fail_weather_without_api_key() {
    let server = server(MutationPolicy::Admin);

    let resp = server.get("/api/external/weather?lat=35.6&lon=139.6").await;

    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_error(&resp.json(), "INTERNAL", "internal error");
}

#[tokio::test]
async fn should_require_image_query() {
    let server = server(MutationPolicy::Admin);

    let resp = server.get("/api/external/images?query=%20").await;

    resp.assert_status_bad_request();
    assert_error(&resp.json(), "VALIDATION_ERROR", "query required");
}
