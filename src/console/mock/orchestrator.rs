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

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::fixtures;
use crate::types::{
    CreateRequest, Csp, DeployServiceEntity, HealthStatus, Ocl, RegisterServiceEntity, Response,
    ServiceDeploymentState, ServiceState, ServiceVo, SystemStatus,
};

type Reply<T> = std::result::Result<Json<T>, (StatusCode, Json<Response>)>;

fn reject(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Response>) {
    (status, Json(Response::error(status.as_u16(), message)))
}

/// Registered templates and deployed services of the mock orchestrator
#[derive(Default)]
pub struct MockOrchestrator {
    registered: RwLock<Vec<RegisterServiceEntity>>,
    services: RwLock<Vec<DeployServiceEntity>>,
}

impl MockOrchestrator {
    /// Orchestrator with the kafka template registered.
    pub fn seeded() -> Self {
        let registered = Ocl::from_yaml(fixtures::KAFKA_OCL)
            .map(|ocl| vec![registered_entity(ocl)])
            .unwrap_or_default();

        Self {
            registered: RwLock::new(registered),
            services: RwLock::new(Vec::new()),
        }
    }
}

fn registered_entity(ocl: Ocl) -> RegisterServiceEntity {
    let now = Utc::now();
    RegisterServiceEntity {
        id: Uuid::new_v4(),
        name: ocl.name.clone(),
        version: ocl.version.clone(),
        csp: ocl.cloud_service_provider.name,
        category: ocl.category,
        service_state: ServiceState::Registered,
        create_time: Some(now),
        last_modified_time: Some(now),
        ocl: Some(ocl),
    }
}

fn parse_id(id: &str) -> std::result::Result<Uuid, (StatusCode, Json<Response>)> {
    id.parse()
        .map_err(|_| reject(StatusCode::BAD_REQUEST, format!("'{}' is not a valid id", id)))
}

fn parse_ocl(body: &str) -> std::result::Result<Ocl, (StatusCode, Json<Response>)> {
    Ocl::from_yaml(body).map_err(|e| reject(StatusCode::BAD_REQUEST, e.to_string()))
}

pub async fn health() -> Json<SystemStatus> {
    Json(SystemStatus {
        health_status: HealthStatus::Ok,
    })
}

pub async fn versions() -> Json<Value> {
    Json(fixtures::versions())
}

pub async fn service_versions(Path(name): Path<String>) -> Json<Value> {
    Json(fixtures::service_versions(&name))
}

pub async fn service_list() -> Json<Value> {
    Json(fixtures::service_list())
}

pub async fn version_list() -> Json<Value> {
    Json(fixtures::version_list())
}

pub async fn categories() -> Json<Value> {
    Json(fixtures::categories())
}

pub async fn services(State(mock): State<Arc<MockOrchestrator>>) -> Json<Vec<ServiceVo>> {
    let services = mock.services.read().await;
    Json(services.iter().map(|s| s.service.clone()).collect())
}

pub async fn service_detail(
    State(mock): State<Arc<MockOrchestrator>>,
    Path(id): Path<String>,
) -> Reply<DeployServiceEntity> {
    let id = parse_id(&id)?;
    mock.services
        .read()
        .await
        .iter()
        .find(|s| s.service.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("Service {} not found", id)))
}

/// Deploys a registered template; the deployment succeeds immediately.
pub async fn start(
    State(mock): State<Arc<MockOrchestrator>>,
    Json(request): Json<CreateRequest>,
) -> Reply<String> {
    let registered = mock.registered.read().await;
    let template = registered
        .iter()
        .find(|r| r.name == request.name && r.version == request.version && r.csp == request.csp)
        .ok_or_else(|| {
            reject(
                StatusCode::BAD_REQUEST,
                format!("Service {} {} is not registered for {}", request.name, request.version, request.csp),
            )
        })?;

    let flavor_known = template
        .ocl
        .as_ref()
        .is_some_and(|ocl| ocl.flavor(&request.flavor).is_ok());
    if !flavor_known {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            format!("Flavor {} is not offered by {}", request.flavor, request.name),
        ));
    }

    let now = Utc::now();
    let id = Uuid::new_v4();
    let entity = DeployServiceEntity {
        service: ServiceVo {
            id,
            user_id: request.user_name.clone(),
            category: request.category,
            name: request.name.clone(),
            customer_service_name: request.customer_service_name.clone(),
            version: request.version.clone(),
            csp: request.csp,
            flavor: request.flavor.clone(),
            service_deployment_state: ServiceDeploymentState::DeploySuccess,
            create_time: now,
            last_modified_time: now,
        },
        properties: BTreeMap::from([("region".to_string(), request.region.clone())]),
        create_request: Some(request),
        deploy_resources: Vec::new(),
    };
    drop(registered);

    tracing::info!("mock deployment {} of {}", id, entity.service.name);
    mock.services.write().await.push(entity);

    Ok(Json(id.to_string()))
}

pub async fn stop(State(mock): State<Arc<MockOrchestrator>>, Path(id): Path<String>) -> Reply<Response> {
    let id = parse_id(&id)?;
    let mut services = mock.services.write().await;
    let service = services
        .iter_mut()
        .find(|s| s.service.id == id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("Service {} not found", id)))?;

    service.service.service_deployment_state = ServiceDeploymentState::DestroySuccess;
    service.service.last_modified_time = Utc::now();

    Ok(Json(Response::success(format!("Service {} destroyed", id))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredQuery {
    csp_name: Option<Csp>,
    service_name: Option<String>,
    service_version: Option<String>,
}

pub async fn list_registered(
    State(mock): State<Arc<MockOrchestrator>>,
    Query(query): Query<RegisteredQuery>,
) -> Json<Vec<RegisterServiceEntity>> {
    let registered = mock.registered.read().await;
    Json(
        registered
            .iter()
            .filter(|r| query.csp_name.is_none_or(|csp| r.csp == csp))
            .filter(|r| query.service_name.as_ref().is_none_or(|n| &r.name == n))
            .filter(|r| query.service_version.as_ref().is_none_or(|v| &r.version == v))
            .cloned()
            .collect(),
    )
}

/// Accepts the descriptor as YAML or JSON.
pub async fn register(State(mock): State<Arc<MockOrchestrator>>, body: String) -> Reply<Response> {
    let ocl = parse_ocl(&body)?;

    let mut registered = mock.registered.write().await;
    if registered
        .iter()
        .any(|r| r.name == ocl.name && r.version == ocl.version && r.csp == ocl.cloud_service_provider.name)
    {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            format!("Service {} {} already registered", ocl.name, ocl.version),
        ));
    }

    let entity = registered_entity(ocl);
    let id = entity.id;
    registered.push(entity);

    Ok(Json(Response::success(id.to_string())))
}

pub async fn detail(
    State(mock): State<Arc<MockOrchestrator>>,
    Path(id): Path<String>,
) -> Reply<RegisterServiceEntity> {
    let id = parse_id(&id)?;
    mock.registered
        .read()
        .await
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("Registered service {} not found", id)))
}

pub async fn update(
    State(mock): State<Arc<MockOrchestrator>>,
    Path(id): Path<String>,
    body: String,
) -> Reply<Response> {
    let id = parse_id(&id)?;
    let ocl = parse_ocl(&body)?;

    let mut registered = mock.registered.write().await;
    let entity = registered
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("Registered service {} not found", id)))?;

    entity.name = ocl.name.clone();
    entity.version = ocl.version.clone();
    entity.csp = ocl.cloud_service_provider.name;
    entity.category = ocl.category;
    entity.service_state = ServiceState::Updated;
    entity.last_modified_time = Some(Utc::now());
    entity.ocl = Some(ocl);

    Ok(Json(Response::success(format!("Service {} updated", id))))
}

pub async fn unregister(State(mock): State<Arc<MockOrchestrator>>, Path(id): Path<String>) -> Reply<Response> {
    let id = parse_id(&id)?;
    let mut registered = mock.registered.write().await;
    let before = registered.len();
    registered.retain(|r| r.id != id);

    if registered.len() == before {
        return Err(reject(
            StatusCode::NOT_FOUND,
            format!("Registered service {} not found", id),
        ));
    }
    Ok(Json(Response::success(format!("Service {} unregistered", id))))
}
