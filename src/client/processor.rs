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

//! Status-code dispatch shared by every endpoint.

use crate::client::error::{ApiBody, ApiSnafu, Result};
use crate::client::http::ResponseContext;
use crate::client::media;
use crate::types::Response;
use serde::de::DeserializeOwned;

/// Documented error statuses of the orchestrator, in dispatch order.
const ERROR_STATUSES: [(&str, &str); 3] = [
    ("404", "Not Found"),
    ("400", "Bad Request"),
    ("500", "Internal Server Error"),
];

pub const UNKNOWN_STATUS_LABEL: &str = "Unknown API Status Code!";

/// Whether `code` falls in `code_range`.
///
/// A range is a three character status pattern where `X` matches any digit
/// (`"2XX"`), an exact status (`"404"`), or `"0"` for any status.
pub fn is_code_in_range(code_range: &str, code: u16) -> bool {
    if code_range == "0" {
        return true;
    }

    let code = code.to_string();
    code_range.len() == code.len()
        && code_range
            .chars()
            .zip(code.chars())
            .all(|(r, c)| r.eq_ignore_ascii_case(&'X') || r == c)
}

/// Maps a response to the endpoint's success type `T` or an [`Error::Api`].
///
/// [`Error::Api`]: crate::client::Error::Api
pub fn process<T: DeserializeOwned>(response: ResponseContext) -> Result<T> {
    let code = response.http_status_code();
    let content_type = response.content_type();

    for (range, label) in ERROR_STATUSES {
        if is_code_in_range(range, code) {
            let body = match media::deserialize::<Response>(response.body(), content_type.as_deref()) {
                Ok(body) => ApiBody::Response(body),
                Err(_) => ApiBody::Raw(response.text()),
            };

            return ApiSnafu {
                code,
                label,
                body,
                headers: response.headers().clone(),
            }
            .fail();
        }
    }

    if is_code_in_range("200", code) || (200..=299).contains(&code) {
        return media::deserialize(response.body(), content_type.as_deref());
    }

    ApiSnafu {
        code,
        label: UNKNOWN_STATUS_LABEL,
        body: ApiBody::Raw(response.text()),
        headers: response.headers().clone(),
    }
    .fail()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Error;
    use crate::tests::json_response;
    use crate::types::{HealthStatus, SystemStatus};

    #[test]
    fn test_is_code_in_range() {
        assert!(is_code_in_range("0", 503));
        assert!(is_code_in_range("2XX", 204));
        assert!(is_code_in_range("404", 404));
        assert!(!is_code_in_range("404", 400));
        assert!(!is_code_in_range("2XX", 301));
    }

    #[test]
    fn test_success_codes_deserialize_identically() {
        let body = r#"{"healthStatus":"OK"}"#;
        let expected: SystemStatus = process(json_response(200, body)).expect("200");
        assert_eq!(expected.health_status, HealthStatus::Ok);

        for code in 201..=299 {
            let status: SystemStatus = process(json_response(code, body)).expect("2xx");
            assert_eq!(status, expected, "status {code}");
        }
    }

    #[test]
    fn test_documented_errors_keep_code_and_label() {
        for (code, expected_label) in [
            (400, "Bad Request"),
            (404, "Not Found"),
            (500, "Internal Server Error"),
        ] {
            let body = format!(r#"{{"code":"{code}","message":"boom","success":false}}"#);
            let err = process::<SystemStatus>(json_response(code, &body)).unwrap_err();

            match err {
                Error::Api {
                    code: got,
                    label,
                    body: ApiBody::Response(body),
                    ..
                } => {
                    assert_eq!(got, code);
                    assert_eq!(label, expected_label);
                    assert_eq!(body.message, "boom");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_unparsable_error_body_is_kept_raw() {
        let err = process::<SystemStatus>(json_response(500, "<html>oops</html>")).unwrap_err();
        assert!(matches!(
            err,
            Error::Api { code: 500, body: ApiBody::Raw(ref raw), .. } if raw == "<html>oops</html>"
        ));
    }

    #[test]
    fn test_unknown_status_carries_raw_body() {
        let err = process::<SystemStatus>(json_response(409, "conflict")).unwrap_err();

        match err {
            Error::Api { code, label, body, .. } => {
                assert_eq!(code, 409);
                assert_eq!(label, UNKNOWN_STATUS_LABEL);
                assert_eq!(body, ApiBody::Raw("conflict".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_success_body_mismatch_is_deserialize_error() {
        let err = process::<SystemStatus>(json_response(200, "[]")).unwrap_err();
        assert!(matches!(err, Error::DeserializeJson { .. }));
    }
}
