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
use serde_json::Value;
use std::collections::BTreeMap;

use crate::inventory::{Notice, Resource, ResourceKind, ResourceTable};

/// Rows of one kind
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub kind: ResourceKind,
    pub label: &'static str,
    pub rows: Vec<Resource>,
}

impl From<ResourceTable> for TableResponse {
    fn from(table: ResourceTable) -> Self {
        let kind = table.kind();
        Self {
            kind,
            label: kind.label(),
            rows: table.rows().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub tables: Vec<TableResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    pub name: String,
    /// Remaining form fields become row attributes
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub keys: Vec<String>,
}

/// Table after a mutation and what to tell the user about it
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    #[serde(flatten)]
    pub table: TableResponse,
    pub notices: Vec<Notice>,
}
