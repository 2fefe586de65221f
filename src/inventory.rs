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

//! In-memory resources behind the console CRUD screens.

mod catalog;
mod error;
mod monitoring;
mod resource;

pub use catalog::{Catalog, CatalogEntry, CatalogGroup, CatalogListing, MenuItem};
pub use error::Error;
pub use monitoring::{LogLevel, LogLine, MonitoringReport, Sample};
pub use resource::{
    DEFAULT_SCAN_FREQUENCY, Mutation, Notice, NoticeLevel, PowerState, Resource, ResourceKind, ResourceTable,
};

use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// One table per resource kind
#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    tables: BTreeMap<ResourceKind, ResourceTable>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            tables: ResourceKind::iter().map(|k| (k, ResourceTable::new(k))).collect(),
        }
    }
}

impl Inventory {
    pub fn table(&self, kind: ResourceKind) -> ResourceTable {
        self.tables
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| ResourceTable::new(kind))
    }

    pub fn tables(&self) -> impl Iterator<Item = &ResourceTable> {
        self.tables.values()
    }

    pub fn monitoring(&self) -> MonitoringReport {
        MonitoringReport::from_inventory(self)
    }

    /// Swaps in the table produced by a mutation and hands back its notices.
    pub fn apply(&mut self, mutation: Mutation) -> (ResourceTable, Vec<Notice>) {
        let Mutation { table, notices } = mutation;
        self.tables.insert(table.kind(), table.clone());
        (table, notices)
    }
}
