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

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Category of a managed service
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Category {
    Ai,
    Compute,
    Container,
    Storage,
    Network,
    Database,
    MediaService,
    Security,
    Middleware,
    Others,
}

/// Cloud service provider hosting a managed service
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Csp {
    Huawei,
    FlexibleEngine,
    Openstack,
    Alibaba,
    Aws,
    Azure,
    Google,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&Category::MediaService).expect("serialize"),
            "\"mediaService\""
        );
        assert_eq!(Category::from_str("middleware").ok(), Some(Category::Middleware));
        assert_eq!(Category::Ai.to_string(), "ai");
    }

    #[test]
    fn test_csp_wire_names() {
        assert_eq!(Csp::FlexibleEngine.to_string(), "flexibleEngine");
        let csp: Csp = serde_yaml_ng::from_str("huawei").expect("deserialize");
        assert_eq!(csp, Csp::Huawei);
        assert!(Csp::from_str("digitalocean").is_err());
    }
}
