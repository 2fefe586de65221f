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

//! Canned metrics and logs for every monitored resource in the inventory.

use self::LogLevel::{Info, Warn};
use super::{Inventory, ResourceKind};
use serde::Serialize;
use strum::Display;

/// Half-hour sample slots of a series
pub const SAMPLE_TIMES: [&str; 8] = ["08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30"];

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub time: &'static str,
    pub value: u64,
    /// `<kind>-<name>`
    pub category: String,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: &'static str,
    pub loc: String,
    pub level: LogLevel,
    pub message: &'static str,
}

/// CPU utilization (%), network (bytes) and log lines
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitoringReport {
    pub cpu: Vec<Sample>,
    pub network: Vec<Sample>,
    pub logs: Vec<LogLine>,
}

struct Profile {
    kind: ResourceKind,
    cpu: [u64; 8],
    network: [u64; 8],
    logs: &'static [(&'static str, LogLevel, &'static str)],
}

// Report order follows this table.
const PROFILES: [Profile; 8] = [
    Profile {
        kind: ResourceKind::Vm,
        cpu: [0, 10, 20, 10, 50, 40, 35, 30],
        network: [500, 1000, 200, 100, 500, 400, 3500, 300],
        logs: &[
            ("2022-10-25 08:12:32", Info, "This is a VM log message"),
            ("2022-10-25 08:17:14", Info, "Another VM log message"),
            ("2022-10-25 10:47:14", Warn, "Ouch, potential issue"),
        ],
    },
    Profile {
        kind: ResourceKind::Rds,
        cpu: [90, 30, 50, 40, 45, 40, 30, 50],
        network: [9000, 3000, 5000, 4000, 4500, 4000, 3000, 5000],
        logs: &[
            ("2022-10-25 09:52:12", Info, "Create table"),
            ("2022-10-25 10:27:04", Info, "Update schema"),
            ("2022-10-25 11:47:10", Info, "SQL query"),
        ],
    },
    Profile {
        kind: ResourceKind::Kafka,
        cpu: [10, 5, 5, 10, 15, 20, 10, 10],
        network: [1000, 50, 50, 1000, 150, 200, 10, 10],
        logs: &[
            ("2022-10-25 08:32:12", Info, "Create topic foo"),
            ("2022-10-25 10:27:04", Info, "Create partition"),
        ],
    },
    Profile {
        kind: ResourceKind::Kubernetes,
        cpu: [1, 5, 5, 1, 5, 2, 5, 10],
        network: [100, 5000, 500, 100, 5000, 200, 500, 1000],
        logs: &[
            ("2022-10-25 09:12:02", Info, "Launching pods"),
            ("2022-10-25 11:17:36", Info, "Create kubernetes cluster"),
        ],
    },
    Profile {
        kind: ResourceKind::Rancher,
        cpu: [10, 15, 15, 10, 15, 20, 50, 10],
        network: [200, 2000, 100, 700, 4000, 800, 200, 9000],
        logs: &[("2022-10-25 11:17:36", Info, "Create rancher manager")],
    },
    Profile {
        kind: ResourceKind::Cassandra,
        cpu: [80, 95, 35, 20, 45, 50, 70, 20],
        network: [400, 8000, 200, 700, 7000, 600, 300, 8000],
        logs: &[("2022-10-25 10:37:56", Info, "Create Cassandra query")],
    },
    Profile {
        kind: ResourceKind::Activemq,
        cpu: [20, 45, 55, 30, 75, 20, 30, 80],
        network: [4000, 3000, 2000, 7000, 7000, 6000, 3000, 2000],
        logs: &[("2022-10-25 12:27:16", Info, "ActiveMQ NoW booked")],
    },
    Profile {
        kind: ResourceKind::Pulsar,
        cpu: [40, 35, 45, 38, 79, 66, 62, 70],
        network: [3000, 3000, 200, 300, 8000, 8000, 9000, 8000],
        logs: &[("2022-10-25 10:47:16", Info, "Pulsar broker updated")],
    },
];

fn series(values: &[u64; 8], category: &str) -> impl Iterator<Item = Sample> {
    SAMPLE_TIMES.into_iter().zip(values).map(move |(time, value)| Sample {
        time,
        value: *value,
        category: category.to_string(),
    })
}

impl MonitoringReport {
    /// Containers and registries are not monitored.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut report = MonitoringReport::default();

        for profile in &PROFILES {
            let table = inventory.table(profile.kind);
            for row in table.rows() {
                let category = format!("{}-{}", profile.kind, row.name);
                report.cpu.extend(series(&profile.cpu, &category));
                report.network.extend(series(&profile.network, &category));
                report.logs.extend(profile.logs.iter().map(|&(timestamp, level, message)| LogLine {
                    timestamp,
                    loc: category.clone(),
                    level,
                    message,
                }));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn with_rows(inventory: &mut Inventory, kind: ResourceKind, names: &[&str]) {
        for name in names {
            let mutation = inventory.table(kind).create(name, BTreeMap::new()).expect("create");
            inventory.apply(mutation);
        }
    }

    #[test]
    fn test_empty_inventory_has_no_series() {
        assert_eq!(Inventory::default().monitoring(), MonitoringReport::default());
    }

    #[test]
    fn test_series_per_resource() {
        let mut inventory = Inventory::default();
        with_rows(&mut inventory, ResourceKind::Rds, &["db"]);
        with_rows(&mut inventory, ResourceKind::Vm, &["a", "b"]);
        with_rows(&mut inventory, ResourceKind::Container, &["web"]);

        let report = inventory.monitoring();
        assert_eq!(report.cpu.len(), 24);
        assert_eq!(report.network.len(), 24);

        let categories: Vec<&str> = report.cpu.iter().step_by(8).map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["vm-a", "vm-b", "rds-db"]);

        assert_eq!(report.cpu[4].time, "10:00");
        assert_eq!(report.cpu[4].value, 50);
        assert_eq!(report.network[16].value, 9000);

        assert_eq!(report.logs.len(), 9);
        assert_eq!(report.logs[2].level, LogLevel::Warn);
        assert_eq!(report.logs[8].loc, "rds-db");
        assert_eq!(report.logs[8].message, "SQL query");
    }
}
