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

use super::{authenticate, base_request, execute, path_param, require, set_body};
use crate::client::configuration::Configuration;
use crate::client::error::Result;
use crate::client::http::RequestContext;
use crate::client::media;
use crate::types::{CreateRequest, DeployServiceEntity, Response, ServiceVo};
use http::Method;

const API: &str = "ServiceApi";

/// Parameters of [`ServiceApi::start_with`]
#[derive(Debug, Clone)]
pub struct ServiceApiStartParams {
    pub request: CreateRequest,
}

/// Parameters of [`ServiceApi::stop_with`]
#[derive(Debug, Clone)]
pub struct ServiceApiStopParams {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct ServiceApiRequestFactory {
    configuration: Configuration,
}

impl ServiceApiRequestFactory {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn service_detail(&self, id: &str) -> Result<RequestContext> {
        require(API, "serviceDetail", "id", id)?;
        let path = path_param("/xpanse/service/{id}", "id", id);
        let request = base_request(&self.configuration, &path, Method::GET)?;
        authenticate(&self.configuration, request)
    }

    pub fn services(&self) -> Result<RequestContext> {
        let request = base_request(&self.configuration, "/xpanse/services", Method::GET)?;
        authenticate(&self.configuration, request)
    }

    pub fn start(&self, create_request: &CreateRequest) -> Result<RequestContext> {
        let mut request = base_request(&self.configuration, "/xpanse/service", Method::POST)?;
        set_body(&mut request, create_request, &[media::APPLICATION_JSON])?;
        authenticate(&self.configuration, request)
    }

    pub fn stop(&self, id: &str) -> Result<RequestContext> {
        require(API, "stop", "id", id)?;
        let path = path_param("/xpanse/service/{id}", "id", id);
        let request = base_request(&self.configuration, &path, Method::DELETE)?;
        authenticate(&self.configuration, request)
    }
}

/// Deployed service endpoints
#[derive(Debug, Clone)]
pub struct ServiceApi {
    configuration: Configuration,
    request_factory: ServiceApiRequestFactory,
}

impl ServiceApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            request_factory: ServiceApiRequestFactory::new(configuration.clone()),
            configuration,
        }
    }

    /// `GET /xpanse/service/{id}`
    pub async fn service_detail(&self, id: &str) -> Result<DeployServiceEntity> {
        let request = self.request_factory.service_detail(id)?;
        execute(&self.configuration, request).await
    }

    /// `GET /xpanse/services`
    pub async fn services(&self) -> Result<Vec<ServiceVo>> {
        let request = self.request_factory.services()?;
        execute(&self.configuration, request).await
    }

    /// Starts a deployment and returns the id of the new service.
    pub async fn start(&self, create_request: &CreateRequest) -> Result<String> {
        let request = self.request_factory.start(create_request)?;
        execute(&self.configuration, request).await
    }

    pub async fn start_with(&self, params: ServiceApiStartParams) -> Result<String> {
        self.start(&params.request).await
    }

    /// `DELETE /xpanse/service/{id}`
    pub async fn stop(&self, id: &str) -> Result<Response> {
        let request = self.request_factory.stop(id)?;
        execute(&self.configuration, request).await
    }

    pub async fn stop_with(&self, params: ServiceApiStopParams) -> Result<Response> {
        self.stop(&params.id).await
    }
}
