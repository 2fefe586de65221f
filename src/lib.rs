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

use crate::client::{AdminApi, Configuration, ServiceApi, ServiceVendorApi};
use crate::deployment::{PollPolicy, WaitOutcome};
use crate::types::{CreateRequest, Ocl};
use std::pin::Pin;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod client;
pub mod console;
pub mod deployment;
pub mod inventory;
pub mod types;


/// Logs to stderr, filtered by `RUST_LOG` (default `info`). Command output
/// owns stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run_console(port: u16, mock: bool) -> Result<(), Box<dyn std::error::Error>> {
    console::run(port, mock).await
}

pub async fn health() -> Result<(), Box<dyn std::error::Error>> {
    let status = AdminApi::new(Configuration::from_env()?).health().await?;
    if !status.is_healthy() {
        warn!("orchestrator reports {}", status.health_status);
    }
    print_json(&status).await
}

pub async fn services() -> Result<(), Box<dyn std::error::Error>> {
    let services = ServiceApi::new(Configuration::from_env()?).services().await?;
    print_json(&services).await
}

/// Registers the descriptor stored in `path` (YAML).
pub async fn register(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ocl = Ocl::from_yaml(&tokio::fs::read_to_string(path).await?)?;
    info!("registering {} {} for {}", ocl.name, ocl.version, ocl.cloud_service_provider.name);

    let response = ServiceVendorApi::new(Configuration::from_env()?)
        .register(&ocl)
        .await?;
    print_json(&response).await
}

/// Starts the deployment ordered in `path` (JSON) and optionally waits for it.
pub async fn deploy(path: &str, wait: bool) -> Result<(), Box<dyn std::error::Error>> {
    let request: CreateRequest = serde_json::from_str(&tokio::fs::read_to_string(path).await?)?;
    let api = ServiceApi::new(Configuration::from_env()?);

    if !wait {
        let id = api.start(&request).await?;
        return print_json(&id).await;
    }

    let (id, outcome) = deployment::deploy_and_wait(&api, &request, PollPolicy::default()).await?;
    match outcome {
        WaitOutcome::Ready { value, attempts } => {
            info!("service {} ready after {} attempt(s)", id, attempts);
            print_json(&value).await
        }
        WaitOutcome::Abandoned { attempts } => {
            warn!("service {} still not visible after {} attempt(s)", id, attempts);
            print_json(&id).await
        }
    }
}

/// Writes the JSON schema of the service descriptor.
pub async fn ocl_schema(file: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer: Pin<Box<dyn AsyncWrite + Send>> = if let Some(file) = file {
        Box::pin(
            tokio::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(file)
                .await?,
        )
    } else {
        Box::pin(tokio::io::stdout())
    };

    let schema = schemars::schema_for!(Ocl);
    writer
        .write_all(serde_json::to_string_pretty(&schema)?.as_bytes())
        .await?;
    writer.flush().await?;

    Ok(())
}

async fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(serde_json::to_string_pretty(value)?.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
