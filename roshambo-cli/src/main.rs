mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use roshambo_game::{
    Choice, ComputerOpponent, OutcomeTable, RoshamboError, SeriesConfig, play_round, play_series,
};

/// Exit status for choices outside the rock/paper/scissors alphabet.
const EXIT_INVALID_CHOICE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare outcome text
    Plain,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "roshambo", version)]
#[command(about = "Resolve rock/paper/scissors rounds from the first player's side")]
struct Args {
    /// First player's choice (rock, paper or scissors)
    #[arg(required_unless_present = "table")]
    first: Option<String>,

    /// Second player's choice; omit it to play the seeded computer opponent
    second: Option<String>,

    /// Seed for the computer opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Play a series of this many rounds against the computer opponent
    #[arg(long)]
    rounds: Option<u32>,

    /// JSON series config (rounds, seed); flags override file values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Print the full outcome table and exit
    #[arg(long)]
    table: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut out = stdout().lock();
    match run(&args, &mut out).and_then(|()| out.flush().context("flushing stdout")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_status_for(&err))
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn exit_status_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RoshamboError>() {
        Some(RoshamboError::InvalidChoice { .. }) => EXIT_INVALID_CHOICE,
        _ => 1,
    }
}

fn run(args: &Args, out: &mut dyn Write) -> Result<()> {
    if args.table {
        return report::write_table(out, OutcomeTable::standard(), args.format);
    }

    let first: Choice = args.first.as_deref().unwrap_or_default().parse()?;

    if let Some(second) = args.second.as_deref() {
        let second: Choice = second.parse()?;
        if args.config.is_some() || args.seed.is_some() || args.rounds.is_some() {
            load_series_config(args)?;
            log::warn!("series options ignored when both choices are given");
        }
        let round = play_round(first, second);
        log::info!("{} vs {} -> {}", round.first, round.second, round.outcome);
        return report::write_round(out, &round, false, args.format);
    }

    let cfg = load_series_config(args)?;
    let mut opponent = ComputerOpponent::from_seed(cfg.seed);

    if args.rounds.is_none() && args.config.is_none() {
        let round = play_round(first, opponent.pick());
        log::info!(
            "{} vs computer {} -> {}",
            round.first,
            round.second,
            round.outcome
        );
        return report::write_round(out, &round, true, args.format);
    }

    let throws = vec![first; cfg.rounds as usize];
    let summary = play_series(&throws, &mut opponent);
    log::info!(
        "series of {} rounds (seed {}) -> {}",
        summary.played(),
        cfg.seed,
        summary.verdict()
    );
    report::write_series(out, &summary, args.format)
}

fn load_series_config(args: &Args) -> Result<SeriesConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            log::debug!("loading series config from {}", path.display());
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SeriesConfig::from_json(&raw)
                .with_context(|| format!("invalid series config {}", path.display()))?
        }
        None => SeriesConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(rounds) = args.rounds {
        cfg.rounds = rounds;
    }
    cfg.validate().map_err(RoshamboError::from)?;
    Ok(cfg)
}
