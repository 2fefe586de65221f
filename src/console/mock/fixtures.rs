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

//! Payloads the mock orchestrator starts with.

use serde_json::{Value, json};

pub const KAFKA_OCL: &str = r#"
name: kafka
category: middleware
version: v3.3.2
namespace: ISV-A
icon: kafka.png
description: Kafka cluster with zookeeper
cloudServiceProvider:
  name: huawei
  regions:
    - name: cn-southwest-2
      area: Asia Pacific
    - name: cn-north-4
      area: Asia Pacific
flavors:
  - name: 1-node-with-zookeeper
    fixedProperties:
      flavor_id: s6.large.2
      broker_count: "1"
  - name: 3-node-with-zookeeper
    fixedProperties:
      flavor_id: s6.large.2
      broker_count: "3"
billing:
  model: flat
  period: monthly
  currency: euro
deployment:
  kind: terraform
  context:
    - name: admin_passwd
      kind: fix_variable
      type: string
      description: Admin password of the brokers
      value: changeme
      mandatory: true
    - name: secgroup_id
      kind: variable
      type: string
      description: Security group the brokers join
      mandatory: true
  deployer: |
    resource "huaweicloud_compute_instance" "kafka" {}
"#;

pub fn versions() -> Value {
    json!({ "data": ["3.1.0", "3.2.0", "3.3.0"] })
}

pub fn service_versions(name: &str) -> Value {
    json!({
        "data": {
            "name": name,
            "versionList": ["1.0", "2.0", "3.0"],
        }
    })
}

pub fn categories() -> Value {
    json!({ "data": ["ai", "middleware", "other"] })
}

pub fn service_list() -> Value {
    json!({
        "data": [
            { "content": "Kafka Info", "name": "kafka" },
            { "content": "Rocket MQ Info", "name": "Rocket MQ" },
        ]
    })
}

fn provider(name: &str, billing: u32, areas: [(&str, [&str; 2]); 2]) -> Value {
    json!({
        "name": name,
        "details": {
            "product": "Kafka",
            "billing": billing,
            "time": "ops@example.com",
            "amount": "13800000000",
            "discount": "Shanghai",
            "official": "200000",
        },
        "areaList": areas
            .iter()
            .map(|(area, regions)| json!({ "name": area, "region": regions }))
            .collect::<Vec<_>>(),
    })
}

/// Versions of a service with the providers and regions offering each
pub fn version_list() -> Value {
    json!({
        "data": [
            {
                "version": "1.2",
                "cloudProviderList": [
                    provider("huaweicloud", 18, [("Asia111", ["cn-north-11", "cn-north-12"]), ("Europe111", ["cn-north-1111", "cn-north-1112"])]),
                    provider("aws", 24, [("Asia222", ["cn-north-21", "cn-north-22"]), ("Europe222", ["cn-north-221", "cn-north-221"])]),
                ],
            },
            {
                "version": "1.3",
                "cloudProviderList": [
                    provider("huaweicloud", 36, [("Asia333", ["cn-north-31", "cn-north-32"]), ("Europe333", ["cn-north-331", "cn-north-332"])]),
                    provider("azure", 60, [("Asia444", ["cn-north-41", "cn-north-42"]), ("Europe444", ["cn-north-441", "cn-north-442"])]),
                ],
            },
        ]
    })
}
