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

mod admin;
mod service;
mod service_vendor;

pub use admin::{AdminApi, AdminApiRequestFactory};
pub use service::{ServiceApi, ServiceApiRequestFactory, ServiceApiStartParams, ServiceApiStopParams};
pub use service_vendor::{
    ListRegisteredServicesParams, ServiceVendorApi, ServiceVendorApiRequestFactory,
    ServiceVendorFetchUpdateParams, ServiceVendorUpdateParams,
};

use crate::client::configuration::Configuration;
use crate::client::error::{RequiredSnafu, Result};
use crate::client::http::RequestContext;
use crate::client::{media, middleware, processor};
use http::{Method, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fails with a named error when a required string parameter is empty.
pub(crate) fn require(api: &'static str, method: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return RequiredSnafu { api, method, field }.fail();
    }
    Ok(())
}

/// Escapes `urlencoding` applies but a URI component leaves as is
const COMPONENT_SAFE: [(&str, &str); 5] = [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// `{name}` in `template` replaced by `value` encoded as a URI component:
/// everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
pub(crate) fn path_param(template: &str, name: &str, value: &str) -> String {
    let encoded = COMPONENT_SAFE
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |acc, (escaped, raw)| {
            acc.replace(escaped, raw)
        });
    template.replace(&format!("{{{}}}", name), &encoded)
}

/// Request skeleton shared by every endpoint.
pub(crate) fn base_request(config: &Configuration, path: &str, method: Method) -> Result<RequestContext> {
    let mut request = config.make_request_context(path, method)?;
    request.set_header_param(header::ACCEPT, media::ACCEPT_ANY_JSON)?;
    Ok(request)
}

/// Negotiates the body media type against `accepted` and serializes `body`.
pub(crate) fn set_body<T: Serialize + ?Sized>(
    request: &mut RequestContext,
    body: &T,
    accepted: &[&'static str],
) -> Result<()> {
    let content_type = media::preferred_media_type(accepted);
    request.set_header_param(header::CONTENT_TYPE, content_type)?;
    request.set_body(media::serialize(body, content_type)?);
    Ok(())
}

/// Applies the configured credentials, the last step of every factory.
pub(crate) fn authenticate(config: &Configuration, mut request: RequestContext) -> Result<RequestContext> {
    if let Some(auth) = config.auth() {
        auth.apply_security_authentication(&mut request)?;
    }
    Ok(request)
}

/// Middleware pre-hooks, transport, middleware post-hooks, response processor.
pub(crate) async fn execute<T: DeserializeOwned>(config: &Configuration, request: RequestContext) -> Result<T> {
    let request = middleware::run_pre(config.middleware(), request)?;
    let response = config.http_api().send(request).await?;
    let response = middleware::run_post(config.middleware(), response)?;
    processor::process(response)
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport recording what the client sends.

    use crate::client::error::Result;
    use crate::client::http::{RequestContext, ResponseContext};
    use crate::client::transport::HttpLibrary;
    use futures::FutureExt;
    use futures::future::BoxFuture;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct ScriptedHttpLibrary {
        pub sent: Arc<Mutex<Vec<RequestContext>>>,
        replies: Arc<Mutex<VecDeque<ResponseContext>>>,
    }

    impl ScriptedHttpLibrary {
        pub fn reply(self, response: ResponseContext) -> Self {
            if let Ok(mut replies) = self.replies.lock() {
                replies.push_back(response);
            }
            self
        }

        pub fn last_sent(&self) -> Option<RequestContext> {
            self.sent.lock().ok().and_then(|sent| sent.last().cloned())
        }
    }

    impl HttpLibrary for ScriptedHttpLibrary {
        fn send(&self, request: RequestContext) -> BoxFuture<'_, Result<ResponseContext>> {
            if let Ok(mut sent) = self.sent.lock() {
                sent.push(request);
            }
            let response = self
                .replies
                .lock()
                .ok()
                .and_then(|mut replies| replies.pop_front())
                .unwrap_or_else(|| crate::tests::json_response(500, "no scripted reply"));
            async move { Ok(response) }.boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_param_is_percent_encoded() {
        assert_eq!(
            path_param("/xpanse/register/{id}", "id", "a b/c?d"),
            "/xpanse/register/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_path_param_keeps_component_safe_marks() {
        assert_eq!(
            path_param("/xpanse/service/{id}", "id", "it's (v1)*!~"),
            "/xpanse/service/it's%20(v1)*!~"
        );
        assert_eq!(path_param("/x/{id}", "id", "%21"), "/x/%2521");
    }

    #[test]
    fn test_require_rejects_blank_values() {
        let err = require("ServiceApi", "stop", "id", "  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required parameter id was null or undefined when calling ServiceApi.stop."
        );
        assert!(require("ServiceApi", "stop", "id", "abc").is_ok());
    }
}
