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
    Extension, Json,
    extract::{Path, State},
};

use crate::console::{
    error::{Error, Result},
    models::resource::*,
    state::{AppState, Claims},
};
use crate::inventory::{self, Mutation, ResourceKind, ResourceTable};

pub async fn list_all(State(state): State<AppState>) -> Json<InventoryResponse> {
    let tables = state.inventory.read().await;
    Json(InventoryResponse {
        tables: tables.tables().cloned().map(TableResponse::from).collect(),
    })
}

pub async fn list(State(state): State<AppState>, Path(kind): Path<String>) -> Result<Json<TableResponse>> {
    let kind = parse_kind(&kind)?;
    let table = state.inventory.read().await.table(kind);
    Ok(Json(table.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(kind): Path<String>,
    Json(req): Json<CreateResourceRequest>,
) -> Result<Json<MutationResponse>> {
    let kind = parse_kind(&kind)?;
    tracing::info!("{} creates {} '{}'", claims.sub, kind, req.name);

    apply(&state, kind, |table| table.create(&req.name, req.attributes)).await
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(kind): Path<String>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<MutationResponse>> {
    let kind = parse_kind(&kind)?;
    tracing::info!("{} deletes {} {:?}", claims.sub, kind, req.keys);

    apply(&state, kind, |table| Ok(table.delete(&req.keys))).await
}

pub async fn start(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<MutationResponse>> {
    let kind = parse_kind(&kind)?;
    apply(&state, kind, |table| table.start(&req.keys)).await
}

pub async fn stop(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<MutationResponse>> {
    let kind = parse_kind(&kind)?;
    apply(&state, kind, |table| table.stop(&req.keys)).await
}

/// Runs `op` on the current table of `kind` and swaps the result in while
/// holding the write lock.
async fn apply<F>(state: &AppState, kind: ResourceKind, op: F) -> Result<Json<MutationResponse>>
where
    F: FnOnce(&ResourceTable) -> std::result::Result<Mutation, inventory::Error>,
{
    let mut tables = state.inventory.write().await;
    let mutation = op(&tables.table(kind))?;
    let (table, notices) = tables.apply(mutation);

    Ok(Json(MutationResponse {
        table: table.into(),
        notices,
    }))
}

fn parse_kind(kind: &str) -> Result<ResourceKind> {
    kind.parse().map_err(|_| Error::NotFound {
        resource: format!("resource kind '{}'", kind),
    })
}
