use std::path::PathBuf;

use clap::Parser;

use batak_bench::config::BenchConfig;
use batak_bench::logging::init_logging;
use batak_bench::simulation::SimulationRunner;
use batak_core::AppInfo;
use batak_core::model::player::PlayerPosition;

/// Seeded self-play harness for the Batak heuristic bots.
#[derive(Debug, Parser)]
#[command(
    name = "batak-bench",
    author,
    version,
    about = "Deterministic Batak self-play harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of rounds to play.
    #[arg(long, value_name = "ROUNDS")]
    rounds: Option<usize>,

    /// Override the RNG seed for the match.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the first dealer (south, west, north, east).
    #[arg(long, value_name = "SEAT", value_parser = parse_seat)]
    dealer: Option<PlayerPosition>,

    /// Exit after validating the configuration (no rounds are played).
    #[arg(long)]
    validate_only: bool,

    /// Include hands and legal moves in bot decision telemetry.
    #[arg(long)]
    log_bot_details: bool,
}

fn parse_seat(raw: &str) -> Result<PlayerPosition, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "south" | "s" => Ok(PlayerPosition::South),
        "west" | "w" => Ok(PlayerPosition::West),
        "north" | "n" => Ok(PlayerPosition::North),
        "east" | "e" => Ok(PlayerPosition::East),
        other => Err(format!("unknown seat '{other}'")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(rounds) = cli.rounds {
        config.deals.rounds = rounds;
    }

    if let Some(seed) = cli.seed {
        config.deals.seed = Some(seed);
    }

    if let Some(dealer) = cli.dealer {
        config.deals.starting_dealer = dealer;
    }

    if cli.log_bot_details {
        config.logging.bot_details = true;
    }

    config.validate()?;

    let outputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let rounds = config.deals.rounds;

    println!(
        "{} {} ({})",
        AppInfo::name(),
        AppInfo::version(),
        AppInfo::codename()
    );
    println!(
        "Loaded configuration '{run_id}' ({rounds} round{}, first dealer {})",
        if rounds == 1 { "" } else { "s" },
        config.deals.starting_dealer
    );

    if cli.validate_only {
        println!("Validation-only mode: simulation skipped.");
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging, &outputs)?;
    let summary = SimulationRunner::new(config, outputs).run()?;
    println!(
        "Simulation complete for '{run_id}': {} rounds (match seed {}) → {} rows at {}",
        summary.rounds_played,
        summary.match_seed,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!(
        "Final score: us {} / them {}",
        summary.final_scores.0, summary.final_scores.1
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(telemetry_path) = summary.telemetry_path.as_ref() {
        println!("Telemetry log: {}", telemetry_path.display());
    }

    Ok(())
}
