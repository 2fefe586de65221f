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

use crate::client::error::{self, Result};
use crate::client::http::{RequestContext, ResponseContext};
use futures::FutureExt;
use futures::future::BoxFuture;
use snafu::ResultExt;

/// Sends a request and returns the raw response.
///
/// Status codes are not interpreted here; any response the server produced
/// is `Ok`, only failures to exchange it are errors.
pub trait HttpLibrary: Send + Sync {
    fn send(&self, request: RequestContext) -> BoxFuture<'_, Result<ResponseContext>>;
}

/// Transport backed by a shared `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpLibrary {
    client: reqwest::Client,
}

impl ReqwestHttpLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpLibrary for ReqwestHttpLibrary {
    fn send(&self, request: RequestContext) -> BoxFuture<'_, Result<ResponseContext>> {
        async move {
            let (method, url, headers, body) = request.into_parts();

            let mut builder = self.client.request(method, url).headers(headers);
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder.send().await.context(error::TransportSnafu)?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await.context(error::TransportSnafu)?;

            Ok(ResponseContext::new(status, headers, body.to_vec()))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use http::header::CONTENT_TYPE;
    use httpmock::prelude::*;
    use url::Url;

    #[tokio::test]
    async fn test_reqwest_transport_sends_body_and_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/xpanse/register")
                    .header("content-type", "application/x-yaml")
                    .body("name: kafka\n");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"code":"200","message":"registered","success":true}"#);
            })
            .await;

        let url = Url::parse(&server.url("/xpanse/register")).expect("url");
        let mut request = RequestContext::new(url, Method::POST);
        request
            .set_header_param(CONTENT_TYPE, "application/x-yaml")
            .expect("header");
        request.set_body(b"name: kafka\n".to_vec());

        let response = ReqwestHttpLibrary::new().send(request).await.expect("send");

        mock.assert_async().await;
        assert_eq!(response.http_status_code(), 200);
        assert_eq!(response.content_type().as_deref(), Some("application/json"));
        assert!(response.text().contains("registered"));
    }

    #[tokio::test]
    async fn test_reqwest_transport_keeps_error_statuses() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/xpanse/health");
                then.status(503).body("maintenance");
            })
            .await;

        let url = Url::parse(&server.url("/xpanse/health")).expect("url");
        let response = ReqwestHttpLibrary::new()
            .send(RequestContext::new(url, Method::GET))
            .await
            .expect("a 503 is still a response");

        assert_eq!(response.http_status_code(), 503);
        assert_eq!(response.text(), "maintenance");
    }
}
