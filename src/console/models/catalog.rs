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

use serde::{Deserialize, Serialize};

use crate::inventory::{CatalogGroup, CatalogListing, MenuItem, Notice, ResourceKind};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub entries: Vec<CatalogListing>,
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterCatalogRequest {
    pub service: ResourceKind,
    pub group: CatalogGroup,
}

#[derive(Debug, Serialize)]
pub struct CatalogActionResponse {
    #[serde(flatten)]
    pub catalog: CatalogResponse,
    pub notices: Vec<Notice>,
}
