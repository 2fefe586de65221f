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
    extract::{Path, State},
};

use crate::console::{
    error::{Error, Result},
    models::catalog::*,
    state::AppState,
};
use crate::inventory::{Catalog, ResourceKind};

pub async fn list_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(view(&*state.catalog.read().await))
}

/// Installs a catalog service; starting one twice only yields a notice.
pub async fn start_service(
    State(state): State<AppState>,
    Path(service): Path<String>,
) -> Result<Json<CatalogActionResponse>> {
    let service: ResourceKind = service.parse().map_err(|_| Error::NotFound {
        resource: format!("catalog service '{}'", service),
    })?;

    let mut catalog = state.catalog.write().await;
    let notices = catalog.start(service)?;

    Ok(Json(CatalogActionResponse {
        catalog: view(&catalog),
        notices,
    }))
}

pub async fn register_service(
    State(state): State<AppState>,
    Json(req): Json<RegisterCatalogRequest>,
) -> Json<CatalogActionResponse> {
    let mut catalog = state.catalog.write().await;
    let notices = catalog.register(req.service, req.group);

    Json(CatalogActionResponse {
        catalog: view(&catalog),
        notices,
    })
}

fn view(catalog: &Catalog) -> CatalogResponse {
    CatalogResponse {
        entries: catalog.listing(),
        menu: catalog.menu().to_vec(),
    }
}
