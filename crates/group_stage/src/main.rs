//! Group stage CLI
//!
//! Simulate a round-robin group phase and report standings and qualifiers.

use anyhow::{Context, Result};
use clap::Parser;
use group_stage::{
    simulation_rng, GroupDefinitions, SimulationConfig, SimulationContext, TournamentReport,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "group_stage",
    about = "Simulate a tournament group phase with Elo-driven match outcomes"
)]
struct Cli {
    /// JSON file mapping group names to their teams.
    #[arg(long, default_value = "data/groups.json")]
    groups: PathBuf,

    /// TOML file with simulation parameters. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible run. Overrides the config seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log every simulated match.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "group_stage=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let defs = GroupDefinitions::load(&cli.groups)
        .with_context(|| format!("loading groups {}", cli.groups.display()))?;
    let mut context = SimulationContext::from_definitions(&defs, &config)
        .context("building teams from group definitions")?;

    let mut rng = simulation_rng(config.seed);
    let results = context.simulate_group_phase(&mut rng);
    let report = TournamentReport::new(config.seed, results, &context);

    if cli.json {
        println!("{}", report.to_json().context("serializing report")?);
    } else {
        report.print_report();
    }

    Ok(())
}
