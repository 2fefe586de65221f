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

use axum::{
    Router,
    routing::{get, post},
};

use crate::console::{handlers, state::AppState};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/session", get(handlers::auth::session_check))
}

/// Mock CRUD over the resource tables
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/resources", get(handlers::resources::list_all))
        .route(
            "/resources/{kind}",
            get(handlers::resources::list).post(handlers::resources::create),
        )
        .route("/resources/{kind}/delete", post(handlers::resources::delete))
        .route("/resources/{kind}/start", post(handlers::resources::start))
        .route("/resources/{kind}/stop", post(handlers::resources::stop))
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(handlers::catalog::list_catalog))
        .route("/catalog/register", post(handlers::catalog::register_service))
        .route("/catalog/{service}/start", post(handlers::catalog::start_service))
}

pub fn monitoring_routes() -> Router<AppState> {
    Router::new().route("/monitoring", get(handlers::monitoring::monitoring))
}
