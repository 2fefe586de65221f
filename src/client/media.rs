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

//! Content negotiation and (de)serialization of request and response bodies.

use crate::client::error::{self, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_X_YAML: &str = "application/x-yaml";
pub const APPLICATION_YML: &str = "application/yml";
pub const APPLICATION_YAML: &str = "application/yaml";
pub const TEXT_PLAIN: &str = "text/plain";

/// Value of the `Accept` header sent with every request
pub const ACCEPT_ANY_JSON: &str = "application/json, */*;q=0.8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Yaml,
    Text,
}

impl MediaType {
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            APPLICATION_JSON => Some(Self::Json),
            APPLICATION_X_YAML | APPLICATION_YML | APPLICATION_YAML => Some(Self::Yaml),
            TEXT_PLAIN => Some(Self::Text),
            t if t.ends_with("+json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Strips parameters and case from a `Content-Type` value.
pub fn normalize_media_type(value: &str) -> Option<String> {
    let media_type = value.split(';').next()?.trim().to_ascii_lowercase();
    (!media_type.is_empty()).then_some(media_type)
}

/// Picks the first candidate this client can serialize, JSON otherwise.
pub fn preferred_media_type(candidates: &[&'static str]) -> &'static str {
    candidates
        .iter()
        .copied()
        .find(|c| matches!(MediaType::from_media_type(c), Some(MediaType::Json | MediaType::Yaml)))
        .unwrap_or(APPLICATION_JSON)
}

pub fn serialize<T: Serialize + ?Sized>(value: &T, media_type: &str) -> Result<Vec<u8>> {
    match MediaType::from_media_type(media_type) {
        Some(MediaType::Yaml) => serde_yaml_ng::to_string(value)
            .map(String::into_bytes)
            .context(error::SerializeYamlSnafu),
        _ => serde_json::to_vec(value).context(error::SerializeJsonSnafu),
    }
}

/// Parses `body` according to the normalized response media type.
///
/// An unknown or missing media type is read as JSON. A `text/plain` body is
/// taken as a single JSON string, so `String` results survive servers that
/// answer with a bare identifier.
pub fn deserialize<T: DeserializeOwned>(body: &[u8], media_type: Option<&str>) -> Result<T> {
    match media_type.and_then(MediaType::from_media_type) {
        Some(MediaType::Yaml) => serde_yaml_ng::from_slice(body).context(error::DeserializeYamlSnafu),
        Some(MediaType::Text) => {
            let text = String::from_utf8_lossy(body).into_owned();
            serde_json::from_value(serde_json::Value::String(text)).context(error::DeserializeJsonSnafu)
        }
        _ => serde_json::from_slice(body).context(error::DeserializeJsonSnafu),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Response;

    #[test]
    fn test_preferred_media_type() {
        assert_eq!(
            preferred_media_type(&[APPLICATION_X_YAML, APPLICATION_YML, APPLICATION_YAML]),
            APPLICATION_X_YAML
        );
        assert_eq!(preferred_media_type(&[APPLICATION_JSON]), APPLICATION_JSON);
        assert_eq!(preferred_media_type(&["application/xml"]), APPLICATION_JSON);
    }

    #[test]
    fn test_normalize_media_type() {
        assert_eq!(
            normalize_media_type("Application/JSON; charset=UTF-8").as_deref(),
            Some("application/json")
        );
        assert_eq!(normalize_media_type(" ; charset=utf-8"), None);
    }

    #[test]
    fn test_yaml_body_round_trip_through_negotiation() {
        let ocl = crate::tests::create_test_ocl();
        let body = serialize(&ocl, APPLICATION_X_YAML).expect("serialize");
        assert!(String::from_utf8_lossy(&body).starts_with("name: kafka"));

        let parsed: crate::types::Ocl =
            deserialize(&body, Some(APPLICATION_YAML)).expect("deserialize");
        assert_eq!(parsed, ocl);
    }

    #[test]
    fn test_plain_text_string_body() {
        let id: String = deserialize(b"ed6248d4-2bcd-4e94-84b0-29e014c05137", Some(TEXT_PLAIN))
            .expect("plain text id");
        assert_eq!(id, "ed6248d4-2bcd-4e94-84b0-29e014c05137");
    }

    #[test]
    fn test_missing_media_type_reads_json() {
        let response: Response =
            deserialize(br#"{"code":"200","message":"ok","success":true}"#, None).expect("json");
        assert!(response.success);
    }
}
