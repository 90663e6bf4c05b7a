use anyhow::Result;
use clap::Parser;
use log::info;

use mikedaily::cli::{self, Cli};
use mikedaily::{AppConfig, AppContext};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    info!("Starting MikeDaily...");

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let ctx = AppContext::from_config(&config)?;
    cli::run(cli, &ctx, &config).await?;

    info!("MikeDaily exited normally");
    Ok(())
}
