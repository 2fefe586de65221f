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

use crate::client::auth::{BearerAuthentication, SecurityAuthentication};
use crate::client::error::{self, Result};
use crate::client::http::RequestContext;
use crate::client::middleware::{Middleware, TracingMiddleware};
use crate::client::transport::{HttpLibrary, ReqwestHttpLibrary};
use http::Method;
use snafu::ResultExt;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Environment variable holding the orchestrator base url
pub const API_URL_ENV: &str = "XPANSE_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Optional bearer token sent with every call
pub const API_TOKEN_ENV: &str = "XPANSE_API_TOKEN";

/// Everything a call needs besides its own parameters: where the
/// orchestrator lives, how to reach it, which hooks wrap every call and
/// which credentials to apply.
#[derive(Clone)]
pub struct Configuration {
    base_url: String,
    http_api: Arc<dyn HttpLibrary>,
    middleware: Vec<Arc<dyn Middleware>>,
    auth: Option<Arc<dyn SecurityAuthentication>>,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Reqwest transport with request logging, pointed at `XPANSE_API_URL`.
    /// A non-empty `XPANSE_API_TOKEN` is sent as a bearer token.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut builder = Self::builder().base_url(base_url).middleware(TracingMiddleware);
        if let Ok(token) = std::env::var(API_TOKEN_ENV)
            && !token.trim().is_empty()
        {
            builder = builder.auth(BearerAuthentication::new(token));
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http_api(&self) -> &dyn HttpLibrary {
        self.http_api.as_ref()
    }

    pub fn middleware(&self) -> &[Arc<dyn Middleware>] {
        &self.middleware
    }

    pub fn auth(&self) -> Option<&dyn SecurityAuthentication> {
        self.auth.as_deref()
    }

    /// `path` must already carry its percent-encoded parameters.
    pub fn make_request_context(&self, path: &str, method: Method) -> Result<RequestContext> {
        let url = format!("{}{}", self.base_url, path);
        let url = Url::parse(&url).context(error::InvalidUrlSnafu { url: url.clone() })?;
        Ok(RequestContext::new(url, method))
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_url", &self.base_url)
            .field("middleware", &self.middleware.len())
            .field("auth", &self.auth.is_some())
            .finish()
    }
}

#[derive(Default)]
pub struct ConfigurationBuilder {
    base_url: Option<String>,
    http_api: Option<Arc<dyn HttpLibrary>>,
    middleware: Vec<Arc<dyn Middleware>>,
    auth: Option<Arc<dyn SecurityAuthentication>>,
}

impl ConfigurationBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn http_api(mut self, http_api: impl HttpLibrary + 'static) -> Self {
        self.http_api = Some(Arc::new(http_api));
        self
    }

    /// Appends a hook; hooks run in the order they are added.
    pub fn middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn auth(mut self, auth: impl SecurityAuthentication + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    pub fn build(self) -> Result<Configuration> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Url::parse(&base_url).context(error::InvalidUrlSnafu { url: base_url.clone() })?;

        Ok(Configuration {
            base_url,
            http_api: self
                .http_api
                .unwrap_or_else(|| Arc::new(ReqwestHttpLibrary::new())),
            middleware: self.middleware,
            auth: self.auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Error;

    #[test]
    fn test_request_context_keeps_base_path() {
        let config = Configuration::builder()
            .base_url("https://console.example.com/api/")
            .build()
            .expect("config");

        let ctx = config
            .make_request_context("/xpanse/health", Method::GET)
            .expect("ctx");
        assert_eq!(ctx.url().as_str(), "https://console.example.com/api/xpanse/health");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = Configuration::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_default_base_url() {
        let config = Configuration::builder().build().expect("config");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.middleware().is_empty());
        assert!(config.auth().is_none());
    }
}
