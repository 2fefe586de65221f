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
use crate::client::http::RequestContext;
use http::header::{self, HeaderName};

/// Applies credentials to a request once the factory has built it
pub trait SecurityAuthentication: Send + Sync {
    fn apply_security_authentication(&self, request: &mut RequestContext) -> Result<()>;
}

/// `Authorization: Bearer <token>`
#[derive(Debug, Clone)]
pub struct BearerAuthentication {
    token: String,
}

impl BearerAuthentication {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl SecurityAuthentication for BearerAuthentication {
    fn apply_security_authentication(&self, request: &mut RequestContext) -> Result<()> {
        request.set_header_param(header::AUTHORIZATION, &format!("Bearer {}", self.token))
    }
}

/// API key sent in a custom header
#[derive(Debug, Clone)]
pub struct ApiKeyAuthentication {
    header: HeaderName,
    key: String,
}

impl ApiKeyAuthentication {
    pub fn new(header: HeaderName, key: impl Into<String>) -> Self {
        Self {
            header,
            key: key.into(),
        }
    }
}

impl SecurityAuthentication for ApiKeyAuthentication {
    fn apply_security_authentication(&self, request: &mut RequestContext) -> Result<()> {
        request.set_header_param(self.header.clone(), &self.key)
    }
}
