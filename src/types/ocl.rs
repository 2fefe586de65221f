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

use crate::types::common::{Category, Csp};
use crate::types::error::{self, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::OptionExt;

mod billing;
mod deployment;
mod flavor;

pub use billing::Billing;
pub use deployment::{DeployVariable, DeployVariableDataType, DeployVariableKind, Deployment, DeployerKind};
pub use flavor::Flavor;

/// Open Services Cloud configuration Language descriptor.
///
/// Describes a managed service as registered by a service vendor: what it is,
/// where it can run, the flavors it is sold in and how it gets deployed.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ocl {
    pub name: String,

    pub category: Category,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub cloud_service_provider: CloudServiceProvider,

    #[serde(default)]
    pub flavors: Vec<Flavor>,

    pub billing: Billing,

    pub deployment: Deployment,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudServiceProvider {
    pub name: Csp,

    #[serde(default)]
    pub regions: Vec<Region>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl Ocl {
    pub fn from_yaml(content: &str) -> Result<Self, Error> {
        let ocl: Ocl = serde_yaml_ng::from_str(content)?;
        ocl.validate()?;
        Ok(ocl)
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Field presence checks applied before a descriptor is sent for registration.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("name", &self.name),
            ("version", &self.version),
            ("deployment.deployer", &self.deployment.deployer),
        ] {
            if value.trim().is_empty() {
                return error::MissingFieldSnafu {
                    service: self.name.clone(),
                    field,
                }
                .fail();
            }
        }

        if self.flavors.is_empty() {
            return error::MissingFieldSnafu {
                service: self.name.clone(),
                field: "flavors",
            }
            .fail();
        }

        Ok(())
    }

    pub fn flavor(&self, name: &str) -> Result<&Flavor, Error> {
        self.flavors
            .iter()
            .find(|f| f.name == name)
            .context(error::UnknownFlavorSnafu {
                service: self.name.clone(),
                flavor: name,
            })
    }

    pub fn region_names(&self) -> Vec<&str> {
        self.cloud_service_provider
            .regions
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocl_from_yaml() {
        let ocl = Ocl::from_yaml(crate::tests::TEST_OCL_YAML).expect("valid ocl");

        assert_eq!(ocl.name, "kafka");
        assert_eq!(ocl.category, Category::Middleware);
        assert_eq!(ocl.cloud_service_provider.name, Csp::Huawei);
        assert_eq!(ocl.region_names(), vec!["cn-southwest-2", "cn-north-4"]);
        assert_eq!(ocl.flavors.len(), 2);
        assert_eq!(ocl.deployment.kind, DeployerKind::Terraform);
        assert_eq!(ocl.deployment.context.len(), 2);
    }

    #[test]
    fn test_ocl_flavor_lookup() {
        let ocl = crate::tests::create_test_ocl();

        let flavor = ocl.flavor("3-node-with-zookeeper").expect("flavor exists");
        assert_eq!(flavor.fixed_properties.get("flavor_id").map(String::as_str), Some("s6.large.2"));

        let err = ocl.flavor("missing").unwrap_err();
        assert!(matches!(err, Error::UnknownFlavor { .. }));
    }

    #[test]
    fn test_ocl_validate_requires_flavors() {
        let mut ocl = crate::tests::create_test_ocl();
        ocl.flavors.clear();

        let err = ocl.validate().unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "flavors"));
    }

    #[test]
    fn test_ocl_validate_requires_version() {
        let mut ocl = crate::tests::create_test_ocl();
        ocl.version = " ".to_string();

        let err = ocl.validate().unwrap_err();
        assert_eq!(err.to_string(), "ocl 'kafka' is missing required field 'version'");
    }

    #[test]
    fn test_ocl_yaml_keeps_camel_case() {
        let yaml = crate::tests::create_test_ocl().to_yaml().expect("serialize");
        assert!(yaml.contains("cloudServiceProvider:"));
        assert!(yaml.contains("fixedProperties:"));
        assert!(!yaml.contains("cloud_service_provider"));
    }

    #[test]
    fn test_ocl_schema_uses_wire_names() {
        let schema = serde_json::to_value(schemars::schema_for!(Ocl)).expect("schema");
        let properties = schema["properties"].as_object().expect("properties");
        assert!(properties.contains_key("cloudServiceProvider"));
        assert!(properties.contains_key("flavors"));
        assert!(schema["required"]
            .as_array()
            .expect("required")
            .iter()
            .any(|f| f == "deployment"));
    }
}
