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

//! Data transfer objects exchanged with the xpanse orchestrator.

pub mod common;
pub mod error;
pub mod ocl;
pub mod response;
pub mod service;
pub mod status;

pub use common::{Category, Csp};
pub use ocl::Ocl;
pub use response::Response;
pub use service::{CreateRequest, DeployServiceEntity, RegisterServiceEntity, ServiceVo};
pub use status::{HealthStatus, ServiceDeploymentState, ServiceState, SystemStatus};
