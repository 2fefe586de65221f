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

use axum::{Extension, Json, extract::State, http::header, response::IntoResponse};
use jsonwebtoken::{EncodingKey, Header, encode};
use snafu::ResultExt;

use crate::console::{
    error::{self, Error, Result},
    models::auth::{LoginRequest, LoginResponse, SessionResponse},
    state::{AppState, Claims, Persona, SESSION_TTL_SECS},
};

/// Opens a session for one of the known personas.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Result<impl IntoResponse> {
    let persona: Persona = req.username.trim().parse().map_err(|_| {
        tracing::warn!("Login rejected for user '{}'", req.username);
        Error::Unauthorized {
            message: "Please use valid user: csp, user, otc".to_string(),
        }
    })?;
    tracing::info!("Login as {}", persona);

    let token = issue_token(&Claims::new(persona), &state.jwt_secret)?;

    let cookie = format!(
        "session={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        token, SESSION_TTL_SECS
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
        }),
    ))
}

pub async fn logout() -> impl IntoResponse {
    let cookie = "session=; Path=/; HttpOnly; Max-Age=0";

    (
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            message: "Logout successful".to_string(),
        }),
    )
}

pub async fn session_check(Extension(claims): Extension<Claims>) -> Json<SessionResponse> {
    let expires_at = chrono::DateTime::from_timestamp(claims.exp as i64, 0).map(|dt| dt.to_rfc3339());

    Json(SessionResponse {
        valid: true,
        username: claims.sub,
        expires_at,
    })
}

pub(crate) fn issue_token(claims: &Claims, secret: &str) -> Result<String> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).context(error::JwtSnafu)
}
