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

use crate::types::common::{Category, Csp};
use crate::types::error::Error;
use crate::types::ocl::Ocl;
use crate::types::status::{ServiceDeploymentState, ServiceState};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;
use uuid::Uuid;

/// Order for deploying a registered service
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub name: String,

    pub version: String,

    pub category: Category,

    pub csp: Csp,

    pub region: String,

    pub flavor: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_service_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Values of the user-facing deploy variables, keyed by variable name
    #[serde(default)]
    pub property: BTreeMap<String, String>,
}

impl CreateRequest {
    /// Builds an order for `ocl` in the given region and flavor, pre-filling
    /// the user-facing variables that carry a default value.
    pub fn for_ocl(ocl: &Ocl, region: &str, flavor: &str) -> Result<Self, Error> {
        let flavor = ocl.flavor(flavor)?;

        let property = ocl
            .deployment
            .context
            .iter()
            .filter(|v| v.is_user_input())
            .filter_map(|v| v.value.clone().map(|value| (v.name.clone(), value)))
            .collect();

        Ok(Self {
            name: ocl.name.clone(),
            version: ocl.version.clone(),
            category: ocl.category,
            csp: ocl.cloud_service_provider.name,
            region: region.to_string(),
            flavor: flavor.name.clone(),
            customer_service_name: None,
            user_name: None,
            property,
        })
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.property.insert(name.into(), value.into());
        self
    }
}

/// Summary of a deployed service as listed by `GET /xpanse/services`
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceVo {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub category: Category,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_service_name: Option<String>,

    pub version: String,

    pub csp: Csp,

    pub flavor: String,

    pub service_deployment_state: ServiceDeploymentState,

    pub create_time: DateTime<Utc>,

    pub last_modified_time: DateTime<Utc>,
}

/// Details of a single deployment as returned by `GET /xpanse/service/{id}`
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeployServiceEntity {
    #[serde(flatten)]
    pub service: ServiceVo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_request: Option<CreateRequest>,

    #[serde(default)]
    pub deploy_resources: Vec<DeployResource>,

    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeployResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    pub name: String,

    pub kind: DeployResourceKind,

    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DeployResourceKind {
    Vm,
    Container,
    PublicIp,
    Vpc,
    Volume,
    #[serde(other)]
    Unknown,
}

/// Service template registered by a vendor
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterServiceEntity {
    pub id: Uuid,

    pub name: String,

    pub version: String,

    pub csp: Csp,

    pub category: Category,

    pub service_state: ServiceState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocl: Option<Ocl>,
}
