//! # Greyscale Web Engine
//!
//! Entry point for the settings and tab-update engine behind the browser
//! shim: persisted per-domain config, domain matching, and style-command
//! fan-out over the local web API.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use greyscale_domain::CliOverrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "greyscale-web")]
#[command(version)]
#[command(about = "Per-domain grayscale engine for the Greyscale Web browser shim")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Bind address override
    #[arg(short, long)]
    bind: Option<String>,

    /// Web server port override
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Settings document path override
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.port,
        settings_path: cli.settings,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let store = bootstrap::init_settings_store(&config).await?;
    let container = di::Container::build(store).await?;

    server::run(config, container).await
}
