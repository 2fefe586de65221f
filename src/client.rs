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

//! Client for the xpanse orchestrator REST API.
//!
//! Every call runs the same pipeline: a request factory builds a
//! [`RequestContext`], the configured middleware pre-hooks run in order, the
//! [`HttpLibrary`] sends it, the post-hooks run in order and the response
//! processor maps the status code to the typed result or an [`Error::Api`].

pub mod apis;
pub mod auth;
pub mod configuration;
pub mod error;
pub mod http;
pub mod media;
pub mod middleware;
pub mod processor;
pub mod transport;

pub use apis::{AdminApi, ServiceApi, ServiceVendorApi};
pub use configuration::Configuration;
pub use error::{ApiBody, Error, Result};
pub use self::http::{RequestContext, ResponseContext};
pub use middleware::Middleware;
pub use transport::HttpLibrary;
