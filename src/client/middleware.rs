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

use crate::client::error::Result;
use crate::client::http::{RequestContext, ResponseContext};
use http::header::HeaderName;
use std::sync::Arc;
use tracing::debug;

/// Cross-cutting hook around every call.
///
/// The chain runs `pre` in registration order before the request is sent and
/// `post` in registration order after the response arrives. Each hook runs
/// exactly once per call; an error from any hook aborts the call.
pub trait Middleware: Send + Sync {
    fn pre(&self, request: RequestContext) -> Result<RequestContext> {
        Ok(request)
    }

    fn post(&self, response: ResponseContext) -> Result<ResponseContext> {
        Ok(response)
    }
}

pub(crate) fn run_pre(chain: &[Arc<dyn Middleware>], request: RequestContext) -> Result<RequestContext> {
    chain.iter().try_fold(request, |request, m| m.pre(request))
}

pub(crate) fn run_post(chain: &[Arc<dyn Middleware>], response: ResponseContext) -> Result<ResponseContext> {
    chain.iter().try_fold(response, |response, m| m.post(response))
}

/// Sets a fixed header on every outgoing request
#[derive(Debug, Clone)]
pub struct HeaderMiddleware {
    name: HeaderName,
    value: String,
}

impl HeaderMiddleware {
    pub fn new(name: HeaderName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl Middleware for HeaderMiddleware {
    fn pre(&self, mut request: RequestContext) -> Result<RequestContext> {
        request.set_header_param(self.name.clone(), &self.value)?;
        Ok(request)
    }
}

/// Logs every request and response at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn pre(&self, request: RequestContext) -> Result<RequestContext> {
        debug!(method = %request.method(), url = %request.url(), "sending orchestrator request");
        Ok(request)
    }

    fn post(&self, response: ResponseContext) -> Result<ResponseContext> {
        debug!(
            status = response.http_status_code(),
            bytes = response.body().len(),
            "received orchestrator response"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::error::{Error, MiddlewareSnafu};
    use http::Method;
    use std::sync::Mutex;
    use url::Url;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Middleware for Recorder {
        fn pre(&self, mut request: RequestContext) -> Result<RequestContext> {
            if let Ok(mut log) = self.log.lock() {
                log.push(format!("pre:{}", self.name));
            }
            request.set_header_param(HeaderName::from_static("x-trace"), self.name)?;
            Ok(request)
        }

        fn post(&self, response: ResponseContext) -> Result<ResponseContext> {
            if let Ok(mut log) = self.log.lock() {
                log.push(format!("post:{}", self.name));
            }
            Ok(response)
        }
    }

    struct Reject;

    impl Middleware for Reject {
        fn pre(&self, _request: RequestContext) -> Result<RequestContext> {
            MiddlewareSnafu {
                middleware: "reject",
                message: "no",
            }
            .fail()
        }
    }

    fn request() -> RequestContext {
        RequestContext::new(Url::parse("http://localhost/xpanse/health").expect("url"), Method::GET)
    }

    #[test]
    fn test_chain_runs_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain: Vec<Arc<dyn Middleware>> = vec![
            Arc::new(Recorder { name: "first", log: log.clone() }),
            Arc::new(Recorder { name: "second", log: log.clone() }),
        ];

        let request = run_pre(&chain, request()).expect("pre");
        // the last hook to run wins the header
        assert_eq!(request.headers()["x-trace"], "second");

        run_post(&chain, crate::tests::json_response(200, "{}")).expect("post");

        let log = log.lock().expect("lock").clone();
        assert_eq!(log, vec!["pre:first", "pre:second", "post:first", "post:second"]);
    }

    #[test]
    fn test_failing_middleware_aborts_chain() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain: Vec<Arc<dyn Middleware>> = vec![
            Arc::new(Reject),
            Arc::new(Recorder { name: "after", log: log.clone() }),
        ];

        let err = run_pre(&chain, request()).unwrap_err();
        assert!(matches!(err, Error::Middleware { .. }));
        assert!(log.lock().expect("lock").is_empty());
    }

    #[test]
    fn test_header_middleware() {
        let m = HeaderMiddleware::new(HeaderName::from_static("x-request-source"), "console");
        let request = m.pre(request()).expect("pre");
        assert_eq!(request.headers()["x-request-source"], "console");
    }
}
