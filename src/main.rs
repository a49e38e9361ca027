use anyhow::Result;
use clap::Parser;
use weekplan::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekplan::observability::init_observability(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    let output = weekplan::convert(&cli, &config)?;
    println!("Meal plan saved to {}", output.display());

    Ok(())
}
