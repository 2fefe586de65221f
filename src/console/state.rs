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

use crate::inventory::{Catalog, Inventory};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumString};
use tokio::sync::RwLock;

/// Lifetime of a console session
pub const SESSION_TTL_SECS: usize = 12 * 3600;

/// Shared state of the console.
///
/// Inventory tables are replaced whole under the write lock, so a reader
/// never observes a half-applied mutation.
#[derive(Clone)]
pub struct AppState {
    pub jwt_secret: Arc<String>,
    pub inventory: Arc<RwLock<Inventory>>,
    pub catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret: Arc::new(jwt_secret),
            inventory: Arc::new(RwLock::new(Inventory::default())),
            catalog: Arc::new(RwLock::new(Catalog::default())),
        }
    }
}

/// Users the console accepts
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Persona {
    /// Cloud service provider operator
    Csp,
    /// End user ordering services
    User,
    /// Open Telekom Cloud operator
    Otc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Persona,
    /// Expiry (Unix timestamp)
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(persona: Persona) -> Self {
        let now = chrono::Utc::now().timestamp() as usize;
        Self {
            sub: persona,
            iat: now,
            exp: now + SESSION_TTL_SECS,
        }
    }
}
