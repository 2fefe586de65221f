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
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use strum::{Display, EnumIter, EnumString};

/// Scan frequency given to registries created without one
pub const DEFAULT_SCAN_FREQUENCY: u32 = 60;

#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Vm,
    Container,
    Registry,
    Kubernetes,
    Kafka,
    Rds,
    Rancher,
    Cassandra,
    Activemq,
    Pulsar,
}

impl ResourceKind {
    /// Human name used in notices
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Vm => "VM",
            ResourceKind::Container => "Container",
            ResourceKind::Registry => "Container registry",
            ResourceKind::Kubernetes => "Kubernetes",
            ResourceKind::Kafka => "Kafka",
            ResourceKind::Rds => "Relational database",
            ResourceKind::Rancher => "Rancher",
            ResourceKind::Cassandra => "Cassandra",
            ResourceKind::Activemq => "ActiveMQ",
            ResourceKind::Pulsar => "Pulsar",
        }
    }

    /// Rows of this kind carry a `Running`/`Stopped` status.
    pub fn has_status(&self) -> bool {
        matches!(self, ResourceKind::Vm | ResourceKind::Container)
    }

    pub fn supports_power(&self) -> bool {
        self.has_status()
    }

    fn created_message(&self, name: &str) -> String {
        match self {
            ResourceKind::Container => format!("Container {} started", name),
            ResourceKind::Registry => format!("Registry {} created", name),
            kind => format!("{} {} created", kind.label(), name),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum PowerState {
    Running,
    Stopped,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// User-facing feedback of an inventory operation
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Resource {
    /// Row key, always equal to `name`
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PowerState>,
    pub created: DateTime<Utc>,
    /// Kind specific columns (image, uri, frequency, flavor, ...)
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// A table after a mutation together with the notices it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub table: ResourceTable,
    pub notices: Vec<Notice>,
}

/// Rows of one resource kind in insertion order.
///
/// Tables are values: every operation leaves `self` untouched and returns
/// the next table, so a caller can swap it in atomically.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ResourceTable {
    kind: ResourceKind,
    rows: Vec<Resource>,
}

impl ResourceTable {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind, rows: Vec::new() }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn rows(&self) -> &[Resource] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Resource> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Appends a row named `name` unless one with that key already exists.
    ///
    /// A duplicate is reported as an error notice and leaves the table as is.
    pub fn create(&self, name: &str, attributes: BTreeMap<String, Value>) -> Result<Mutation, Error> {
        if name.trim().is_empty() {
            return error::EmptyNameSnafu { kind: self.kind }.fail();
        }

        if self.get(name).is_some() {
            return Ok(Mutation {
                table: self.clone(),
                notices: vec![Notice::error(format!("{} {} already exists", self.kind.label(), name))],
            });
        }

        let mut attributes = attributes;
        attributes.remove("key");
        attributes.remove("name");
        attributes.remove("status");
        attributes.remove("created");
        if self.kind == ResourceKind::Registry {
            let frequency = attributes.entry("frequency".to_string()).or_insert(Value::Null);
            if is_blank(frequency) {
                *frequency = Value::from(DEFAULT_SCAN_FREQUENCY);
            }
        }

        let mut table = self.clone();
        table.rows.push(Resource {
            key: name.to_string(),
            name: name.to_string(),
            status: self.kind.has_status().then_some(PowerState::Running),
            created: Utc::now(),
            attributes,
        });

        Ok(Mutation {
            table,
            notices: vec![Notice::success(self.kind.created_message(name))],
        })
    }

    /// Removes exactly the rows whose key is in `selected`, keeping the order
    /// of the others. Keys with no row are ignored.
    pub fn delete(&self, selected: &[String]) -> Mutation {
        let keys: BTreeSet<&str> = selected.iter().map(String::as_str).collect();

        let table = ResourceTable {
            kind: self.kind,
            rows: self
                .rows
                .iter()
                .filter(|r| !keys.contains(r.key.as_str()))
                .cloned()
                .collect(),
        };

        let notices = selected
            .iter()
            .map(|key| Notice::info(format!("{} {} deleted", self.kind.label(), key)))
            .collect();

        Mutation { table, notices }
    }

    pub fn start(&self, selected: &[String]) -> Result<Mutation, Error> {
        self.set_power(selected, PowerState::Running, "start")
    }

    pub fn stop(&self, selected: &[String]) -> Result<Mutation, Error> {
        self.set_power(selected, PowerState::Stopped, "stop")
    }

    // Every row gets the new state once per selected key, whatever was
    // selected. Only the notices name the selection.
    fn set_power(&self, selected: &[String], state: PowerState, action: &'static str) -> Result<Mutation, Error> {
        if !self.kind.supports_power() {
            return error::UnsupportedActionSnafu { kind: self.kind, action }.fail();
        }
        if selected.is_empty() {
            return error::EmptySelectionSnafu { kind: self.kind, action }.fail();
        }

        let verb = match state {
            PowerState::Running => "started",
            PowerState::Stopped => "stopped",
        };

        let mut table = self.clone();
        let mut notices = Vec::with_capacity(selected.len());
        for key in selected {
            for row in table.rows.iter_mut() {
                row.status = Some(state);
            }
            notices.push(Notice::info(format!("{} {} {}", self.kind.label(), key, verb)));
        }

        Ok(Mutation { table, notices })
    }
}

// null, false, 0 and "" count as not given
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
