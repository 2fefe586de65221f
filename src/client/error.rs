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

use crate::types::Response;
use http::HeaderMap;
use snafu::Snafu;
use std::fmt;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "Required parameter {} was null or undefined when calling {}.{}.",
        field,
        api,
        method
    ))]
    Required {
        api: &'static str,
        method: &'static str,
        field: &'static str,
    },

    /// Non-success answer of the orchestrator
    #[snafu(display("HTTP-Code: {}, Message: {}, Body: {}", code, label, body))]
    Api {
        code: u16,
        label: String,
        body: ApiBody,
        headers: HeaderMap,
    },

    #[snafu(display("invalid server url '{}': {}", url, source))]
    InvalidUrl { url: String, source: url::ParseError },

    #[snafu(display("invalid value for header '{}': {}", name, source))]
    InvalidHeader {
        name: String,
        source: http::header::InvalidHeaderValue,
    },

    #[snafu(display("transport error: {}", source))]
    Transport { source: reqwest::Error },

    #[snafu(display("failed to read response body: {}", message))]
    Body { message: String },

    #[snafu(display("json serialization error: {}", source))]
    SerializeJson { source: serde_json::Error },

    #[snafu(display("yaml serialization error: {}", source))]
    SerializeYaml { source: serde_yaml_ng::Error },

    #[snafu(display("json deserialization error: {}", source))]
    DeserializeJson { source: serde_json::Error },

    #[snafu(display("yaml deserialization error: {}", source))]
    DeserializeYaml { source: serde_yaml_ng::Error },

    #[snafu(display("middleware '{}' aborted the call: {}", middleware, message))]
    Middleware { middleware: String, message: String },
}

/// Body carried by an [`Error::Api`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// Error envelope sent for a documented status code
    Response(Response),
    /// Raw body of an undocumented status code, or of an unparsable envelope
    Raw(String),
}

impl fmt::Display for ApiBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiBody::Response(response) => write!(f, "{}", response),
            ApiBody::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

impl Error {
    /// HTTP status of an orchestrator error, `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
