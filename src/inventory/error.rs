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

use super::resource::ResourceKind;
use snafu::Snafu;

/// Requests the inventory refuses outright. Outcomes the user should see,
/// such as a duplicate name, are notices instead.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{} does not support {}", kind, action))]
    UnsupportedAction { kind: ResourceKind, action: &'static str },

    #[snafu(display("no {} selected to {}", kind, action))]
    EmptySelection { kind: ResourceKind, action: &'static str },

    #[snafu(display("a {} needs a name", kind))]
    EmptyName { kind: ResourceKind },

    #[snafu(display("'{}' is not in the catalog", service))]
    UnknownService { service: String },
}
