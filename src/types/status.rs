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

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, Display)]
pub enum HealthStatus {
    #[serde(rename = "OK")]
    #[strum(serialize = "OK")]
    Ok,

    #[serde(rename = "NOK")]
    #[strum(serialize = "NOK")]
    Nok,
}

/// Health of the orchestrator, returned by `GET /xpanse/health`
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub health_status: HealthStatus,
}

impl SystemStatus {
    pub fn is_healthy(&self) -> bool {
        self.health_status == HealthStatus::Ok
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceDeploymentState {
    Deploying,
    DeploySuccess,
    DeployFailed,
    Destroying,
    DestroySuccess,
    DestroyFailed,
}

impl ServiceDeploymentState {
    /// No further transition is expected from this state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Deploying | Self::Destroying)
    }
}

/// Registration state of a service template
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    Registered,
    Updated,
}
