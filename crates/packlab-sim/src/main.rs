use std::path::PathBuf;

use clap::Parser;

use packlab_core::PackCategory;
use packlab_sim::config::SimConfig;
use packlab_sim::logging::init_logging;
use packlab_sim::runner::SimRunner;

/// Pack-opening odds simulator.
#[derive(Debug, Parser)]
#[command(
    name = "packlab-sim",
    author,
    version,
    about = "Simulates card pack openings against a layered odds configuration"
)]
struct Cli {
    /// Path to the YAML odds configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "sim/odds.yaml")]
    config: PathBuf,

    /// Override the number of packs to open.
    #[arg(long, value_name = "PACKS")]
    packs: Option<u64>,

    /// Override the RNG seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the pack category to open.
    #[arg(long, value_name = "CATEGORY")]
    category: Option<PackCategory>,

    /// Exit after validating the configuration (no packs are opened).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SimConfig::from_path(&cli.config)?;

    if let Some(packs) = cli.packs {
        config.simulation.packs = packs;
    }

    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }

    if let Some(category) = cli.category {
        config.simulation.category = category;
    }

    config.validate()?;
    init_logging(&config.logging)?;

    if cli.validate_only {
        println!("Configuration OK: {}", cli.config.display());
        return Ok(());
    }

    let summary = SimRunner::new(config).run()?;
    println!(
        "Opened {} '{}' packs with seed {}",
        summary.report.packs, summary.category, summary.seed
    );
    print!("{}", summary.report.render());

    Ok(())
}
