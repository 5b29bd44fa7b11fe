mod common;

use axum::http::{Method, StatusCode};
use common::{build_app, get, json_request, load_test_config};
use tower::ServiceExt;

fn location_of(response: &axum::http::Response<axum::body::Body>) -> &str {
    response
        .headers()
        .get("Location")
        .expect("Location header missing")
        .to_str()
        .expect("Location header not valid UTF-8")
}

async fn body_json(response: axum::http::Response<axum::body::Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

#[tokio::test]
async fn integration_unauthenticated_dashboard_redirects_to_login() {
    let (app, _session) = build_app(load_test_config());

    let response = app
        .clone()
        .oneshot(get("/dashboard"))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/");
}

#[tokio::test]
async fn integration_public_routes_are_served() {
    let (app, _session) = build_app(load_test_config());

    let response = app
        .clone()
        .oneshot(get("/"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["view"], "Login");

    let response = app
        .clone()
        .oneshot(get("/register"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["view"], "Register");
}

#[tokio::test]
async fn integration_login_unlocks_protected_routes() {
    let (app, _session) = build_app(load_test_config());

    let response = app
        .clone()
        .oneshot(json_request(
            "/session",
            Method::POST,
            r#"{"username":"adam"}"#,
        ))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get("/dashboard"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["view"], "DashboardHome");
    assert_eq!(body["location"], "/dashboard");

    let response = app
        .clone()
        .oneshot(get("/visualization/9"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["view"], "Visualization");
    assert_eq!(body["params"]["id"], "9");
}

#[tokio::test]
async fn integration_wildcard_redirects_regardless_of_session() {
    let (app, session) = build_app(load_test_config());

    let response = app
        .clone()
        .oneshot(get("/nonexistent/xyz"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/");

    session
        .login(navotron::models::User::new("adam"))
        .expect("login should succeed");

    let response = app
        .clone()
        .oneshot(get("/nonexistent/xyz"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/");
}

#[tokio::test]
async fn integration_logout_reinstates_redirects() {
    let (app, _session) = build_app(load_test_config());

    let response = app
        .clone()
        .oneshot(json_request(
            "/session",
            Method::POST,
            r#"{"username":"adam"}"#,
        ))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request("/session", Method::DELETE, ""))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get("/dashboard"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/");
}

#[tokio::test]
async fn integration_health_and_metrics() {
    let (app, _session) = build_app(load_test_config());

    let response = app
        .clone()
        .oneshot(get("/health"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    // Drive one navigation so the counters have something to show.
    app.clone()
        .oneshot(get("/dashboard"))
        .await
        .expect("request should complete");

    let response = app
        .clone()
        .oneshot(get("/metrics"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let text = String::from_utf8(bytes.to_vec()).expect("metrics body not UTF-8");
    assert!(text.contains("navigations_total"));
}
