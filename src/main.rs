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

use clap::{Parser, Subcommand};
use shadow_rs::shadow;

shadow!(build);

#[derive(Parser)]
#[command(name = "xpanse-console")]
#[command(about = "Console and client for the xpanse service orchestrator", long_about = None)]
#[command(version = build::PKG_VERSION, long_version = build::CLAP_LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the console HTTP server
    Console {
        #[arg(short, long, env = "CONSOLE_PORT", default_value_t = 9090)]
        port: u16,

        /// Also serve the mock orchestrator under /xpanse
        #[arg(long)]
        mock: bool,
    },

    /// Query the orchestrator health (XPANSE_API_URL)
    Health {},

    /// List deployed services
    Services {},

    /// Register a service descriptor
    Register {
        /// OCL descriptor in YAML
        ocl: String,
    },

    /// Deploy a registered service
    Deploy {
        /// Create request in JSON
        request: String,

        /// Poll until the service is visible or the deploy timeout passes
        #[arg(long)]
        wait: bool,
    },

    /// Output the OCL JSON schema
    Schema {
        /// Optional output path. If not set, the output will be written to stdout.
        #[arg(short, long)]
        file: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    xpanse_console::init_tracing();

    match cli.command {
        Commands::Console { port, mock } => xpanse_console::run_console(port, mock).await?,
        Commands::Health {} => xpanse_console::health().await?,
        Commands::Services {} => xpanse_console::services().await?,
        Commands::Register { ocl } => xpanse_console::register(&ocl).await?,
        Commands::Deploy { request, wait } => xpanse_console::deploy(&request, wait).await?,
        Commands::Schema { file } => xpanse_console::ocl_schema(file).await?,
    }

    Ok(())
}
