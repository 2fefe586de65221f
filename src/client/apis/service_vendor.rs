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
use crate::types::{Csp, Ocl, RegisterServiceEntity, Response};
use http::Method;

const API: &str = "ServiceVendorApi";

/// Media types the orchestrator accepts for descriptor uploads
const OCL_MEDIA_TYPES: &[&str] = &[
    media::APPLICATION_X_YAML,
    media::APPLICATION_YML,
    media::APPLICATION_YAML,
];

/// Filters of [`ServiceVendorApi::list_registered_services_with`]; unset
/// filters are left out of the query.
#[derive(Debug, Clone, Default)]
pub struct ListRegisteredServicesParams {
    pub csp_name: Option<Csp>,
    pub service_name: Option<String>,
    pub service_version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServiceVendorFetchUpdateParams {
    pub id: String,
    pub ocl_location: String,
}

#[derive(Debug, Clone)]
pub struct ServiceVendorUpdateParams {
    pub id: String,
    pub ocl: Ocl,
}

#[derive(Debug, Clone)]
pub struct ServiceVendorApiRequestFactory {
    configuration: Configuration,
}

impl ServiceVendorApiRequestFactory {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn detail(&self, id: &str) -> Result<RequestContext> {
        require(API, "detail", "id", id)?;
        let path = path_param("/xpanse/register/{id}", "id", id);
        let request = base_request(&self.configuration, &path, Method::GET)?;
        authenticate(&self.configuration, request)
    }

    pub fn fetch(&self, ocl_location: &str) -> Result<RequestContext> {
        require(API, "fetch", "oclLocation", ocl_location)?;
        let mut request = base_request(&self.configuration, "/xpanse/register/file", Method::POST)?;
        request.set_query_param("oclLocation", ocl_location);
        authenticate(&self.configuration, request)
    }

    pub fn fetch_update(&self, id: &str, ocl_location: &str) -> Result<RequestContext> {
        require(API, "fetchUpdate", "id", id)?;
        require(API, "fetchUpdate", "oclLocation", ocl_location)?;
        let path = path_param("/xpanse/register/file/{id}", "id", id);
        let mut request = base_request(&self.configuration, &path, Method::PUT)?;
        request.set_query_param("oclLocation", ocl_location);
        authenticate(&self.configuration, request)
    }

    pub fn list_registered_services(&self, params: &ListRegisteredServicesParams) -> Result<RequestContext> {
        let mut request = base_request(&self.configuration, "/xpanse/register", Method::GET)?;
        if let Some(csp) = params.csp_name {
            request.set_query_param("cspName", &csp.to_string());
        }
        if let Some(name) = &params.service_name {
            request.set_query_param("serviceName", name);
        }
        if let Some(version) = &params.service_version {
            request.set_query_param("serviceVersion", version);
        }
        authenticate(&self.configuration, request)
    }

    pub fn register(&self, ocl: &Ocl) -> Result<RequestContext> {
        let mut request = base_request(&self.configuration, "/xpanse/register", Method::POST)?;
        set_body(&mut request, ocl, OCL_MEDIA_TYPES)?;
        authenticate(&self.configuration, request)
    }

    pub fn unregister(&self, id: &str) -> Result<RequestContext> {
        require(API, "unregister", "id", id)?;
        let path = path_param("/xpanse/register/{id}", "id", id);
        let request = base_request(&self.configuration, &path, Method::DELETE)?;
        authenticate(&self.configuration, request)
    }

    pub fn update(&self, id: &str, ocl: &Ocl) -> Result<RequestContext> {
        require(API, "update", "id", id)?;
        let path = path_param("/xpanse/register/{id}", "id", id);
        let mut request = base_request(&self.configuration, &path, Method::PUT)?;
        set_body(&mut request, ocl, OCL_MEDIA_TYPES)?;
        authenticate(&self.configuration, request)
    }
}

/// Endpoints used by service vendors to manage their registered templates
#[derive(Debug, Clone)]
pub struct ServiceVendorApi {
    configuration: Configuration,
    request_factory: ServiceVendorApiRequestFactory,
}

impl ServiceVendorApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            request_factory: ServiceVendorApiRequestFactory::new(configuration.clone()),
            configuration,
        }
    }

    pub async fn detail(&self, id: &str) -> Result<RegisterServiceEntity> {
        let request = self.request_factory.detail(id)?;
        execute(&self.configuration, request).await
    }

    /// Asks the orchestrator to download and register the descriptor at
    /// `ocl_location`.
    pub async fn fetch(&self, ocl_location: &str) -> Result<Response> {
        let request = self.request_factory.fetch(ocl_location)?;
        execute(&self.configuration, request).await
    }

    pub async fn fetch_update(&self, id: &str, ocl_location: &str) -> Result<Response> {
        let request = self.request_factory.fetch_update(id, ocl_location)?;
        execute(&self.configuration, request).await
    }

    pub async fn fetch_update_with(&self, params: ServiceVendorFetchUpdateParams) -> Result<Response> {
        self.fetch_update(&params.id, &params.ocl_location).await
    }

    pub async fn list_registered_services(
        &self,
        csp_name: Option<Csp>,
        service_name: Option<&str>,
        service_version: Option<&str>,
    ) -> Result<Vec<RegisterServiceEntity>> {
        self.list_registered_services_with(ListRegisteredServicesParams {
            csp_name,
            service_name: service_name.map(str::to_string),
            service_version: service_version.map(str::to_string),
        })
        .await
    }

    pub async fn list_registered_services_with(
        &self,
        params: ListRegisteredServicesParams,
    ) -> Result<Vec<RegisterServiceEntity>> {
        let request = self.request_factory.list_registered_services(&params)?;
        execute(&self.configuration, request).await
    }

    /// `POST /xpanse/register` with the descriptor as YAML
    pub async fn register(&self, ocl: &Ocl) -> Result<Response> {
        let request = self.request_factory.register(ocl)?;
        execute(&self.configuration, request).await
    }

    pub async fn unregister(&self, id: &str) -> Result<Response> {
        let request = self.request_factory.unregister(id)?;
        execute(&self.configuration, request).await
    }

    pub async fn update(&self, id: &str, ocl: &Ocl) -> Result<Response> {
        let request = self.request_factory.update(id, ocl)?;
        execute(&self.configuration, request).await
    }

    pub async fn update_with(&self, params: ServiceVendorUpdateParams) -> Result<Response> {
        self.update(&params.id, &params.ocl).await
    }
}
