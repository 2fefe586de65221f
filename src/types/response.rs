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
use std::fmt;

/// Generic result envelope of the orchestrator, also used as error body.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Response {
    pub code: String,
    pub message: String,
    pub success: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl Response {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: "200".to_string(),
            message: message.into(),
            success: true,
            details: Vec::new(),
        }
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            success: false,
            details: Vec::new(),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.details.is_empty() {
            write!(f, "[{}] {}", self.code, self.message)
        } else {
            write!(f, "[{}] {} ({})", self.code, self.message, self.details.join("; "))
        }
    }
}
