use anyhow::Context;
use clap::Parser;
use laserbox::{init_logging, Config, BUILD_DATE, VERSION};
use laserbox_web::Server;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "laserbox-web")]
#[command(version, about = "Serve laserbox drawings over HTTP", long_about = None)]
struct Args {
    /// Configuration file (JSON or TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides server.bind
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging()?;

    let mut config =
        Config::load_or_default(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
        config.validate()?;
    }

    info!("laserbox-web {} (built {})", VERSION, BUILD_DATE);

    Server::bind(config.server).await?.serve().await
}
