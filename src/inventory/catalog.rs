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

use super::error::{self, Error};
use super::resource::{Notice, ResourceKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use strum::Display;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CatalogGroup {
    Compute,
    Database,
    Integration,
}

/// A managed service that can be installed from the catalog
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub service: ResourceKind,
    pub group: CatalogGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

/// A service available in the console navigation
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub service: ResourceKind,
    pub group: CatalogGroup,
    /// Unset for the services the console ships with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogListing {
    pub service: ResourceKind,
    pub label: &'static str,
    pub group: CatalogGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
    pub deployed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    menu: Vec<MenuItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        let entry = |service, group, registered: &str| CatalogEntry {
            service,
            group,
            registered_at: registered.parse().ok(),
        };
        let item = |service, group| MenuItem {
            service,
            group,
            started_at: None,
        };

        Self {
            entries: vec![
                entry(ResourceKind::Kubernetes, CatalogGroup::Compute, "2022-09-21T10:18:42.208Z"),
                entry(ResourceKind::Rancher, CatalogGroup::Compute, "2022-09-19T13:48:42.208Z"),
                entry(ResourceKind::Cassandra, CatalogGroup::Database, "2022-08-16T17:25:15.208Z"),
                entry(ResourceKind::Activemq, CatalogGroup::Integration, "2022-08-26T08:25:15.208Z"),
            ],
            menu: vec![
                item(ResourceKind::Vm, CatalogGroup::Compute),
                item(ResourceKind::Container, CatalogGroup::Compute),
                item(ResourceKind::Rds, CatalogGroup::Database),
                item(ResourceKind::Kafka, CatalogGroup::Integration),
            ],
        }
    }
}

impl Catalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn is_started(&self, service: ResourceKind) -> bool {
        self.menu.iter().any(|m| m.service == service)
    }

    pub fn listing(&self) -> Vec<CatalogListing> {
        self.entries
            .iter()
            .map(|e| CatalogListing {
                service: e.service,
                label: e.service.label(),
                group: e.group,
                registered_at: e.registered_at,
                deployed: self.is_started(e.service),
            })
            .collect()
    }

    /// Installs `service` from the catalog and adds it to the menu.
    pub fn start(&mut self, service: ResourceKind) -> Result<Vec<Notice>, Error> {
        if self.is_started(service) {
            return Ok(vec![Notice::error(format!("{} already started", service))]);
        }

        let group = self
            .entries
            .iter()
            .find(|e| e.service == service)
            .map(|e| e.group)
            .context(error::UnknownServiceSnafu {
                service: service.to_string(),
            })?;

        self.menu.push(MenuItem {
            service,
            group,
            started_at: Some(Utc::now()),
        });

        Ok(vec![
            Notice::info(format!("Deploying {} service", service)),
            Notice::success(format!("{} service started", service)),
        ])
    }

    /// Makes `service` installable under `group`.
    pub fn register(&mut self, service: ResourceKind, group: CatalogGroup) -> Vec<Notice> {
        if self.entries.iter().any(|e| e.service == service) {
            return vec![Notice::error(format!("{} already registered", service))];
        }

        self.entries.push(CatalogEntry {
            service,
            group,
            registered_at: Some(Utc::now()),
        });

        vec![
            Notice::info(format!("Registering {} service", service)),
            Notice::success(format!("{} service registered", service.label())),
        ]
    }
}
