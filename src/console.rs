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

//! Console HTTP server: session handling, the resource inventory API and the
//! optional mock orchestrator.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod mock;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{app, run};
pub use state::AppState;
