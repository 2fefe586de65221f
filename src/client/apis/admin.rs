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

use super::{authenticate, base_request, execute};
use crate::client::configuration::Configuration;
use crate::client::error::Result;
use crate::client::http::RequestContext;
use crate::types::SystemStatus;
use http::Method;

#[derive(Debug, Clone)]
pub struct AdminApiRequestFactory {
    configuration: Configuration,
}

impl AdminApiRequestFactory {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn health(&self) -> Result<RequestContext> {
        let request = base_request(&self.configuration, "/xpanse/health", Method::GET)?;
        authenticate(&self.configuration, request)
    }
}

/// Orchestrator administration endpoints
#[derive(Debug, Clone)]
pub struct AdminApi {
    configuration: Configuration,
    request_factory: AdminApiRequestFactory,
}

impl AdminApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            request_factory: AdminApiRequestFactory::new(configuration.clone()),
            configuration,
        }
    }

    /// `GET /xpanse/health`
    pub async fn health(&self) -> Result<SystemStatus> {
        let request = self.request_factory.health()?;
        execute(&self.configuration, request).await
    }
}
