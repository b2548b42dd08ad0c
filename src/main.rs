//! roles-api - read-only REST API over a static roles dataset

use clap::Parser;
use roles_api::server::builder::{self, ConfigSource, DEFAULT_CONFIG_PATH};
use roles_api::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Command line flags; they win over the config file and the environment
#[derive(Debug, Parser)]
#[command(name = "roles-api", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "ROLES_API_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Listen host
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let (mut config, source) = match builder::load_config(&cli.config).await {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(host) = cli.host {
        config.api.server.host = host;
    }
    if let Some(port) = cli.port {
        config.api.server.port = port;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match source {
        ConfigSource::File(path) => info!("✅ Configuration loaded from {}", path.display()),
        ConfigSource::Defaults { missing } => warn!(
            "⚠️  Configuration file {} not found, using defaults",
            missing.display()
        ),
    }

    match builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display (not Debug) keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
