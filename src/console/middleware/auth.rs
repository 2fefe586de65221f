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
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::console::error::{Error, Result};
use crate::console::state::{AppState, Claims};

/// Verifies the `session` cookie and injects its [`Claims`] into the request
/// extensions. Health probes, login and the mock orchestrator are public.
pub async fn auth_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Result<Response> {
    let path = request.uri().path();
    if is_public(path) {
        return Ok(next.run(request).await);
    }

    let cookies = request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = parse_session_cookie(cookies).ok_or_else(|| Error::Unauthorized {
        message: "Missing session".to_string(),
    })?;

    let claims = verify_token(&token, &state.jwt_secret)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn is_public(path: &str) -> bool {
    path == "/healthz" || path == "/readyz" || path.starts_with("/api/v1/login") || path.starts_with("/xpanse/")
}

/// Checks signature and expiry of a session token.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let claims = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map_err(|e| {
            tracing::warn!("JWT validation failed: {}", e);
            Error::Jwt { source: e }
        })?
        .claims;

    let now = chrono::Utc::now().timestamp() as usize;
    if claims.exp < now {
        tracing::warn!("Token expired");
        return Err(Error::Unauthorized {
            message: "Session expired".to_string(),
        });
    }

    Ok(claims)
}

fn parse_session_cookie(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        (name == "session" && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::state::Persona;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).expect("sign")
    }

    #[test]
    fn test_parse_session_cookie() {
        let cookies = "session=test_token; other=value";
        assert_eq!(parse_session_cookie(cookies), Some("test_token".to_string()));

        assert_eq!(parse_session_cookie("other=value"), None);
        assert_eq!(parse_session_cookie("session="), None);
    }

    #[test]
    fn test_public_paths() {
        assert!(is_public("/healthz"));
        assert!(is_public("/api/v1/login"));
        assert!(is_public("/xpanse/health"));
        assert!(!is_public("/api/v1/resources"));
        assert!(!is_public("/api/v1/session"));
    }

    #[test]
    fn test_verify_token() {
        let claims = Claims::new(Persona::Csp);
        let claims = verify_token(&sign(&claims, "s3cret"), "s3cret").expect("valid");
        assert_eq!(claims.sub, Persona::Csp);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = sign(&Claims::new(Persona::User), "s3cret");
        assert!(matches!(verify_token(&token, "other"), Err(Error::Jwt { .. })));

        let mut forged = token.clone();
        forged.push('x');
        assert!(verify_token(&forged, "s3cret").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut claims = Claims::new(Persona::Otc);
        claims.iat -= 2 * 3600 * 12;
        claims.exp = claims.iat + 3600;
        assert!(verify_token(&sign(&claims, "s3cret"), "s3cret").is_err());
    }
}
