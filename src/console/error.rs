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
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use snafu::Snafu;

use crate::inventory;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Unauthorized: {}", message))]
    Unauthorized { message: String },

    #[snafu(display("Not found: {}", resource))]
    NotFound { resource: String },

    #[snafu(display("Bad request: {}", message))]
    BadRequest { message: String },

    #[snafu(display("Inventory error: {}", source))]
    Inventory { source: inventory::Error },

    #[snafu(display("JWT error: {}", source))]
    Jwt { source: jsonwebtoken::errors::Error },
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match &self {
            Error::Unauthorized { message } => (StatusCode::UNAUTHORIZED, "Unauthorized", message.clone(), None),
            Error::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Resource not found: {}", resource),
                None,
            ),
            Error::BadRequest { message } => (StatusCode::BAD_REQUEST, "BadRequest", message.clone(), None),
            Error::Inventory { source } => {
                let status = match source {
                    inventory::Error::UnknownService { .. } => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, "InventoryError", source.to_string(), None)
            }
            Error::Jwt { source } => (
                StatusCode::UNAUTHORIZED,
                "JwtError",
                "Invalid or expired token".to_string(),
                Some(source.to_string()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

impl From<inventory::Error> for Error {
    fn from(source: inventory::Error) -> Self {
        Error::Inventory { source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
