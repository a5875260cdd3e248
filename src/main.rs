use clap::Parser;
use laserbox::cli::{run, Cli};
use laserbox::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    run(&cli)?;

    Ok(())
}
