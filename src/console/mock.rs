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

//! Stand-in for the orchestrator REST API during development.
//!
//! The router is mounted by `console --mock` and can also be plugged into a
//! [`Configuration`](crate::client::Configuration) through
//! [`MockHttpLibrary`], which answers requests in-process.

pub mod fixtures;
pub mod orchestrator;

use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, post},
};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;
use tower::ServiceExt;

use crate::client::error::{BodySnafu, Result};
use crate::client::{HttpLibrary, RequestContext, ResponseContext};
pub use orchestrator::MockOrchestrator;

pub fn router(mock: Arc<MockOrchestrator>) -> Router {
    Router::new()
        .route("/xpanse/health", get(orchestrator::health))
        .route("/xpanse/versions", get(orchestrator::versions))
        .route("/xpanse/versions/{name}", get(orchestrator::service_versions))
        .route("/xpanse/serviceList", get(orchestrator::service_list))
        .route("/xpanse/versionList", get(orchestrator::version_list))
        .route("/xpanse/services", get(orchestrator::services))
        .route("/xpanse/service", post(orchestrator::start))
        .route(
            "/xpanse/service/{id}",
            get(orchestrator::service_detail).delete(orchestrator::stop),
        )
        .route("/xpanse/register/categories", get(orchestrator::categories))
        .route(
            "/xpanse/register",
            get(orchestrator::list_registered).post(orchestrator::register),
        )
        .route(
            "/xpanse/register/{id}",
            get(orchestrator::detail)
                .put(orchestrator::update)
                .delete(orchestrator::unregister),
        )
        .with_state(mock)
}

/// Transport answering from a mock router without opening a socket
#[derive(Clone)]
pub struct MockHttpLibrary {
    router: Router,
}

impl MockHttpLibrary {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Transport over a freshly seeded mock orchestrator.
    pub fn seeded() -> Self {
        Self::new(router(Arc::new(MockOrchestrator::seeded())))
    }
}

impl HttpLibrary for MockHttpLibrary {
    fn send(&self, request: RequestContext) -> BoxFuture<'_, Result<ResponseContext>> {
        async move {
            let (method, url, headers, body) = request.into_parts();
            let uri = match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            };

            let mut http_request = Request::builder()
                .method(method)
                .uri(uri)
                .body(body.map(Body::from).unwrap_or_else(Body::empty))
                .map_err(|e| BodySnafu { message: e.to_string() }.build())?;
            *http_request.headers_mut() = headers;

            let response = match self.router.clone().oneshot(http_request).await {
                Ok(response) => response,
                Err(never) => match never {},
            };

            let (parts, body) = response.into_parts();
            let body = axum::body::to_bytes(body, usize::MAX)
                .await
                .map_err(|e| BodySnafu { message: e.to_string() }.build())?;

            Ok(ResponseContext::new(parts.status, parts.headers, body.to_vec()))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AdminApi, Configuration, Error, ServiceApi, ServiceVendorApi};
    use crate::deployment::{PollPolicy, deploy_and_wait};
    use crate::types::{CreateRequest, Csp, Ocl, ServiceDeploymentState, ServiceState};

    fn config() -> Configuration {
        Configuration::builder()
            .http_api(MockHttpLibrary::seeded())
            .build()
            .expect("config")
    }

    #[tokio::test]
    async fn test_health_through_client() {
        let status = AdminApi::new(config()).health().await.expect("health");
        assert!(status.is_healthy());
    }

    #[tokio::test]
    async fn test_register_update_unregister() {
        let config = config();
        let vendor = ServiceVendorApi::new(config);

        let registered = vendor
            .list_registered_services(Some(Csp::Huawei), Some("kafka"), None)
            .await
            .expect("list");
        assert_eq!(registered.len(), 1);

        let mut ocl = registered[0].ocl.clone().expect("ocl");
        ocl.version = "v3.4.0".to_string();
        let response = vendor.register(&ocl).await.expect("register");
        let id = response.message;

        let err = vendor.register(&ocl).await.unwrap_err();
        assert_eq!(err.status(), Some(400));

        ocl.description = Some("updated".to_string());
        vendor.update(&id, &ocl).await.expect("update");
        let entity = vendor.detail(&id).await.expect("detail");
        assert_eq!(entity.service_state, ServiceState::Updated);
        assert_eq!(entity.ocl.and_then(|o| o.description).as_deref(), Some("updated"));

        vendor.unregister(&id).await.expect("unregister");
        let err = vendor.detail(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_deploy_against_mock() {
        let config = config();
        let vendor = ServiceVendorApi::new(config.clone());
        let api = ServiceApi::new(config);

        let ocl = vendor.list_registered_services(None, None, None).await.expect("list")[0]
            .ocl
            .clone()
            .expect("ocl");
        let request = CreateRequest::for_ocl(&ocl, "cn-north-4", "3-node-with-zookeeper")
            .expect("request")
            .with_property("secgroup_id", "sg-01");

        let (id, outcome) = deploy_and_wait(&api, &request, PollPolicy::default())
            .await
            .expect("deploy");
        assert_eq!(outcome.attempts(), 1);

        let services = api.services().await.expect("services");
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id.to_string(), id);

        api.stop(&id).await.expect("stop");
        let detail = api.service_detail(&id).await.expect("detail");
        assert_eq!(
            detail.service.service_deployment_state,
            ServiceDeploymentState::DestroySuccess
        );
    }

    #[tokio::test]
    async fn test_unknown_flavor_is_a_bad_request() {
        let api = ServiceApi::new(config());
        let ocl = Ocl::from_yaml(fixtures::KAFKA_OCL).expect("fixture");
        let mut request = CreateRequest::for_ocl(&ocl, "cn-north-4", "1-node-with-zookeeper").expect("request");
        request.flavor = "9-node".to_string();

        match api.start(&request).await.unwrap_err() {
            Error::Api { code, label, .. } => {
                assert_eq!(code, 400);
                assert_eq!(label, "Bad Request");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_bad_id_is_rejected() {
        let err = ServiceApi::new(config()).service_detail("not-a-uuid").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
    }
}
