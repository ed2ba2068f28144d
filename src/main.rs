//! College Directory
//!
//! Main application entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use college_directory::{
    config::{Settings, ENV_PREFIX},
    tui,
    utils::logging,
    Controller, ServiceFactory,
};

#[derive(Parser, Debug)]
#[command(name = "college-directory", version, about = "Browse colleges and manage enquiries")]
struct Args {
    /// TOML configuration file layered over the defaults
    #[arg(short, long, env = "COLLEGE_DIRECTORY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Write the effective configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // Load configuration
    let mut settings = Settings::load(args.config.as_deref())
        .with_context(|| format!("loading configuration ({}_* environment)", ENV_PREFIX))?;
    if let Some(base_url) = args.base_url {
        settings.api.base_url = base_url;
    }
    settings.validate()?;

    if let Some(path) = args.write_default_config {
        std::fs::write(&path, settings.to_toml()?)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", college_directory::info());
    info!(base_url = %settings.api.base_url, "Using directory API");

    // Initialize services
    let services = ServiceFactory::new(&settings)?;
    let mut controller = Controller::new(services.api, services.authenticator);
    controller.start().await;

    tui::run(&mut controller, &settings.ui).await?;

    info!("College directory client has been shut down.");
    Ok(())
}
