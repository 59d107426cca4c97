use anyhow::Result;
use colored::Colorize;
use roshambo_game::{Outcome, OutcomeTable, Round, SeriesSummary, TableEntry};
use std::io::Write;

use crate::OutputFormat;

fn styled(outcome: Outcome) -> colored::ColoredString {
    match outcome {
        Outcome::Win => outcome.as_str().green().bold(),
        Outcome::Lose => outcome.as_str().red().bold(),
        Outcome::Tie => outcome.as_str().yellow().bold(),
    }
}

pub fn write_table(out: &mut dyn Write, table: &OutcomeTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<TableEntry> = table.entries().collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        OutputFormat::Plain => {
            for row in table.entries() {
                writeln!(
                    out,
                    "{:<8} vs {:<8} -> {}",
                    row.first.as_str(),
                    row.second.as_str(),
                    row.outcome
                )?;
            }
        }
    }
    Ok(())
}

/// Plain output for a round is the bare outcome; against the computer the
/// opponent's throw follows in parentheses.
pub fn write_round(
    out: &mut dyn Write,
    round: &Round,
    vs_computer: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(round)?)?,
        OutputFormat::Plain if vs_computer => {
            writeln!(out, "{} (computer threw {})", round.outcome, round.second)?;
        }
        OutputFormat::Plain => writeln!(out, "{}", round.outcome)?,
    }
    Ok(())
}

pub fn write_series(out: &mut dyn Write, summary: &SeriesSummary, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let mut value = serde_json::to_value(summary)?;
        value["verdict"] = serde_json::to_value(summary.verdict())?;
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    for (idx, round) in summary.rounds.iter().enumerate() {
        writeln!(
            out,
            "round {}: {} vs {} -> {}",
            idx + 1,
            round.first,
            round.second,
            round.outcome
        )?;
    }
    writeln!(
        out,
        "wins: {}, losses: {}, ties: {}",
        summary.wins, summary.losses, summary.ties
    )?;
    writeln!(out, "verdict: {}", styled(summary.verdict()))?;
    Ok(())
}
