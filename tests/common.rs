use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};

use navotron::config::{Config, ConfigV1};
use navotron::metrics::Metrics;
use navotron::navigation::{route_table, Navigator, RouteTable};
use navotron::routes::create_router;
use navotron::session::SessionStore;
use navotron::state::AppState;
use navotron::storage::create_storage;

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
storage:
  type: "memory"
bind_address: 127.0.0.1:8081
logging:
  level: "debug"
  format: "console"
"#;

pub fn load_test_config() -> ConfigV1 {
    parse_config(TEST_CONFIG)
}

pub fn parse_config(yaml: &str) -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(yaml))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

/// Builds the full application router over the configured storage backend.
/// Also returns the session store so tests can inspect and drive it
/// directly.
pub fn build_app(config: ConfigV1) -> (Router, Arc<SessionStore>) {
    let config = Arc::new(config);
    let storage = create_storage(&config.storage);
    let session =
        Arc::new(SessionStore::restore(storage).expect("Failed to restore session from storage"));
    let navigator = Arc::new(Navigator::new(
        RouteTable::new(route_table()),
        session.clone(),
    ));

    let state = AppState {
        config,
        session: session.clone(),
        navigator,
        metrics: Metrics::new(),
    };

    (create_router(state), session)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn json_request(path: &str, method: Method, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}
