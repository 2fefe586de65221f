// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::http::{HeaderValue, Method, header};
use axum::{Router, http::StatusCode, middleware, response::IntoResponse, routing::get};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::console::mock::{self, MockOrchestrator};
use crate::console::{routes, state::AppState};

/// Environment variable holding the session signing key
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

const DEFAULT_JWT_SECRET: &str = "xpanse-console-secret-change-me-in-production";

pub async fn run(port: u16, mock: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting xpanse console on port {}", port);

    let jwt_secret = std::env::var(JWT_SECRET_ENV).unwrap_or_else(|_| {
        tracing::warn!("{} not set, using the built-in development key", JWT_SECRET_ENV);
        DEFAULT_JWT_SECRET.to_string()
    });

    let app = app(AppState::new(jwt_secret), mock);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Console server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  - POST /api/v1/login");
    tracing::info!("  - GET  /api/v1/resources");
    tracing::info!("  - GET  /api/v1/catalog");
    tracing::info!("  - GET  /api/v1/monitoring");
    if mock {
        tracing::info!("  - GET  /xpanse/* (mock orchestrator)");
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Console router; with `mock` the orchestrator stand-in is mounted under
/// `/xpanse`.
pub fn app(state: AppState, mock: bool) -> Router {
    let mut app = Router::new()
        .route("/healthz", get(health_check))
        .route("/readyz", get(ready_check))
        .nest("/api/v1", api_routes())
        .with_state(state.clone());

    if mock {
        app = app.merge(mock::router(Arc::new(MockOrchestrator::seeded())));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(HeaderValue::from_static("http://localhost:3000"))
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::COOKIE])
                .allow_credentials(true),
        )
        .layer(middleware::from_fn_with_state(
            state,
            crate::console::middleware::auth::auth_middleware,
        ))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(routes::auth_routes())
        .merge(routes::resource_routes())
        .merge(routes::catalog_routes())
        .merge(routes::monitoring_routes())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn ready_check() -> impl IntoResponse {
    (StatusCode::OK, "Ready")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const SECRET: &str = "test-secret";

    async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let response = app.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, cookie, body)
    }

    fn post_json(uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).expect("request")
    }

    fn get_with(uri: &str, cookie: &str) -> Request<Body> {
        Request::get(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .expect("request")
    }

    async fn login(app: &Router, username: &str) -> String {
        let (status, cookie, _) = call(app, post_json("/api/v1/login", None, json!({ "username": username }))).await;
        assert_eq!(status, StatusCode::OK);
        let cookie = cookie.expect("session cookie");
        assert!(cookie.contains("HttpOnly"));
        cookie.split(';').next().expect("pair").to_string()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = app(AppState::new(SECRET.to_string()), false);
        let response = app
            .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
            .await
            .expect("infallible");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_user() {
        let app = app(AppState::new(SECRET.to_string()), false);
        let (status, cookie, body) =
            call(&app, post_json("/api/v1/login", None, json!({ "username": "admin" }))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(cookie.is_none());
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_session_required() {
        let app = app(AppState::new(SECRET.to_string()), false);

        let (status, _, _) = call(
            &app,
            Request::get("/api/v1/resources").body(Body::empty()).expect("request"),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _, _) = call(&app, get_with("/api/v1/session", "session=forged.token.value")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let cookie = login(&app, "csp").await;
        let (status, _, body) = call(&app, get_with("/api/v1/session", &cookie)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["username"], "csp");
    }

    #[tokio::test]
    async fn test_session_signed_with_other_key_is_rejected() {
        let cookie = login(&app(AppState::new("other".to_string()), false), "user").await;
        let app = app(AppState::new(SECRET.to_string()), false);
        let (status, _, _) = call(&app, get_with("/api/v1/session", &cookie)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_resource_crud() {
        let app = app(AppState::new(SECRET.to_string()), false);
        let cookie = login(&app, "user").await;

        for name in ["a", "b", "c"] {
            let (status, _, body) = call(
                &app,
                post_json(
                    "/api/v1/resources/container",
                    Some(&cookie),
                    json!({ "name": name, "image": "nginx" }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["notices"][0]["level"], "success");
        }

        let (_, _, body) = call(
            &app,
            post_json("/api/v1/resources/container", Some(&cookie), json!({ "name": "a" })),
        )
        .await;
        assert_eq!(body["rows"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["notices"][0]["message"], "Container a already exists");

        let (_, _, body) = call(
            &app,
            post_json("/api/v1/resources/container/delete", Some(&cookie), json!({ "keys": ["b"] })),
        )
        .await;
        let keys: Vec<&str> = body["rows"]
            .as_array()
            .expect("rows")
            .iter()
            .filter_map(|r| r["key"].as_str())
            .collect();
        assert_eq!(keys, vec!["a", "c"]);

        let (_, _, body) = call(
            &app,
            post_json("/api/v1/resources/container/stop", Some(&cookie), json!({ "keys": ["a"] })),
        )
        .await;
        assert_eq!(body["rows"][1]["status"], "Stopped");

        let (_, _, body) = call(&app, get_with("/api/v1/resources/container", &cookie)).await;
        assert_eq!(body["rows"][0]["image"], "nginx");
        assert_eq!(body["rows"][0]["status"], "Stopped");
    }

    #[tokio::test]
    async fn test_resource_errors() {
        let app = app(AppState::new(SECRET.to_string()), false);
        let cookie = login(&app, "otc").await;

        let (status, _, _) = call(&app, get_with("/api/v1/resources/mainframe", &cookie)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, body) = call(
            &app,
            post_json("/api/v1/resources/kafka/start", Some(&cookie), json!({ "keys": ["k"] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "InventoryError");
    }

    #[tokio::test]
    async fn test_catalog() {
        let app = app(AppState::new(SECRET.to_string()), false);
        let cookie = login(&app, "csp").await;

        let (_, _, body) = call(
            &app,
            post_json("/api/v1/catalog/rancher/start", Some(&cookie), json!({})),
        )
        .await;
        assert_eq!(body["notices"][1]["message"], "rancher service started");

        let (status, _, _) = call(
            &app,
            post_json("/api/v1/catalog/pulsar/start", Some(&cookie), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, _, body) = call(
            &app,
            post_json(
                "/api/v1/catalog/register",
                Some(&cookie),
                json!({ "service": "pulsar", "group": "integration" }),
            ),
        )
        .await;
        assert_eq!(body["notices"][1]["message"], "Pulsar service registered");

        let (_, _, body) = call(&app, get_with("/api/v1/catalog", &cookie)).await;
        let deployed: Vec<(&str, bool)> = body["entries"]
            .as_array()
            .expect("entries")
            .iter()
            .filter_map(|e| Some((e["service"].as_str()?, e["deployed"].as_bool()?)))
            .collect();
        assert!(deployed.contains(&("rancher", true)));
        assert!(deployed.contains(&("pulsar", false)));
    }

    #[tokio::test]
    async fn test_monitoring_follows_inventory() {
        let app = app(AppState::new(SECRET.to_string()), false);
        let cookie = login(&app, "csp").await;

        let (status, _, body) = call(&app, get_with("/api/v1/monitoring", &cookie)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cpu"], json!([]));

        for (kind, name) in [("kafka", "events"), ("container", "web")] {
            call(
                &app,
                post_json(&format!("/api/v1/resources/{}", kind), Some(&cookie), json!({ "name": name })),
            )
            .await;
        }

        let (_, _, body) = call(&app, get_with("/api/v1/monitoring", &cookie)).await;
        assert_eq!(body["cpu"].as_array().map(Vec::len), Some(8));
        assert_eq!(body["cpu"][0], json!({ "time": "08:00", "value": 10, "category": "kafka-events" }));
        assert_eq!(body["network"][7]["value"], 10);
        assert_eq!(body["logs"][0]["loc"], "kafka-events");
        assert_eq!(body["logs"][0]["level"], "INFO");
        assert_eq!(body["logs"][1]["message"], "Create partition");
    }

    #[tokio::test]
    async fn test_logout_clears_session_cookie() {
        let app = app(AppState::new(SECRET.to_string()), false);
        let cookie = login(&app, "user").await;

        let (status, set_cookie, body) = call(&app, post_json("/api/v1/logout", Some(&cookie), json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let set_cookie = set_cookie.expect("cleared cookie");
        assert!(set_cookie.starts_with("session=;"));
        assert!(set_cookie.contains("Max-Age=0"));

        let (status, _, _) = call(&app, post_json("/api/v1/logout", None, json!({}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_mock_routes_only_with_mock() {
        let request = || Request::get("/xpanse/register/categories").body(Body::empty()).expect("request");

        let (status, _, _) = call(&app(AppState::new(SECRET.to_string()), false), request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, body) = call(&app(AppState::new(SECRET.to_string()), true), request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!(["ai", "middleware", "other"]));
    }

    #[tokio::test]
    async fn test_mock_service_and_version_lists() {
        let app = app(AppState::new(SECRET.to_string()), true);
        let get = |uri: &str| Request::get(uri).body(Body::empty()).expect("request");

        let (status, _, body) = call(&app, get("/xpanse/serviceList")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][1]["name"], "Rocket MQ");

        let (_, _, body) = call(&app, get("/xpanse/versionList")).await;
        let versions = body["data"].as_array().expect("versions");
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1]["cloudProviderList"][1]["name"], "azure");
        assert_eq!(
            versions[0]["cloudProviderList"][0]["areaList"][1]["region"],
            json!(["cn-north-1111", "cn-north-1112"])
        );
    }
}
