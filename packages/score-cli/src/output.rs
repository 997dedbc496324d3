//! Rendering schedules, round checks and scoreboards.

use std::io::Write;

use scorekeeper::domain::{round_details, RoundViolation, Schedule};
use scorekeeper::{is_valid_round, AppError, Game, OutputFormat, RoundDetails, ScoreSheet};
use serde::Serialize;

/// Diagnostics for one recorded round.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundCheck {
    pub round_index: usize,
    pub card_count: i32,
    pub valid: bool,
    pub details: RoundDetails,
    pub violations: Vec<RoundViolation>,
}

/// Flat row for table and CSV output.
#[derive(Debug, Serialize)]
struct CheckRow {
    round: usize,
    cards: i32,
    disallowed: i32,
    taken_total: i32,
    valid: bool,
    violations: String,
}

impl From<&RoundCheck> for CheckRow {
    fn from(check: &RoundCheck) -> Self {
        Self {
            round: check.round_index,
            cards: check.card_count,
            disallowed: check.details.disallowed,
            taken_total: check.details.taken_total,
            valid: check.valid,
            violations: check
                .violations
                .iter()
                .map(|v| violation_label(*v))
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}

fn violation_label(v: RoundViolation) -> &'static str {
    match v {
        RoundViolation::HookBid => "hook_bid",
        RoundViolation::TakenTotal => "taken_total",
        RoundViolation::OutOfBounds => "out_of_bounds",
    }
}

/// Check every recorded round independently (no halting).
pub fn check_rounds(game: &Game, schedule: Schedule) -> Vec<RoundCheck> {
    game.rounds
        .iter()
        .zip(schedule)
        .enumerate()
        .map(|(round_index, (round, &card_count))| {
            let details = round_details(round, card_count);
            RoundCheck {
                round_index,
                card_count,
                valid: is_valid_round(&details),
                violations: details.violations(),
                details,
            }
        })
        .collect()
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::output(e.to_string())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_schedule<W: Write>(
    out: &mut W,
    player_count: usize,
    schedule: Schedule,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => write_json(out, schedule),
        OutputFormat::Csv => {
            let mut w = csv::Writer::from_writer(out);
            w.write_record(["round", "cards"]).map_err(csv_error)?;
            for (i, cards) in schedule.iter().enumerate() {
                w.write_record([i.to_string(), cards.to_string()])
                    .map_err(csv_error)?;
            }
            w.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(out, "{player_count} players, {} rounds", schedule.len())?;
            let cards: Vec<String> = schedule.iter().map(|c| c.to_string()).collect();
            writeln!(out, "{}", cards.join(" "))?;
            Ok(())
        }
    }
}

pub fn write_checks<W: Write>(
    out: &mut W,
    checks: &[RoundCheck],
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => write_json(out, checks),
        OutputFormat::Csv => {
            let mut w = csv::Writer::from_writer(out);
            for check in checks {
                w.serialize(CheckRow::from(check)).map_err(csv_error)?;
            }
            w.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{:>5} {:>5} {:>10} {:>6}  status",
                "round", "cards", "disallowed", "taken"
            )?;
            for check in checks {
                let row = CheckRow::from(check);
                let status = if row.valid { "ok" } else { row.violations.as_str() };
                writeln!(
                    out,
                    "{:>5} {:>5} {:>10} {:>6}  {status}",
                    row.round, row.cards, row.disallowed, row.taken_total
                )?;
            }
            Ok(())
        }
    }
}

/// Render final scores, optionally with the round-by-round breakdown.
pub fn write_scores<W: Write>(
    out: &mut W,
    sheet: &ScoreSheet,
    breakdown: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let totals = sheet.totals();
    match format {
        OutputFormat::Json => {
            if breakdown {
                write_json(out, sheet)
            } else {
                let outcome = scorekeeper::ScoreOutcome {
                    scores: totals,
                    first_invalid_round: sheet.first_invalid_round,
                };
                write_json(out, &outcome)
            }
        }
        OutputFormat::Csv => {
            let mut w = csv::Writer::from_writer(out);
            if breakdown {
                let header = ["round".to_string(), "cards".to_string()]
                    .into_iter()
                    .chain(sheet.players.iter().cloned());
                w.write_record(header).map_err(csv_error)?;
                for row in &sheet.rounds {
                    let record = [row.round_index.to_string(), row.card_count.to_string()]
                        .into_iter()
                        .chain(row.totals.iter().map(|t| t.to_string()));
                    w.write_record(record).map_err(csv_error)?;
                }
            } else {
                w.write_record(["player", "score"]).map_err(csv_error)?;
                for (player, score) in sheet.players.iter().zip(&totals) {
                    w.write_record([player.clone(), score.to_string()])
                        .map_err(csv_error)?;
                }
            }
            w.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            let width = sheet.players.iter().map(|p| p.len()).max().unwrap_or(0).max(6);
            if breakdown {
                write!(out, "{:>5} {:>5}", "round", "cards")?;
                for p in &sheet.players {
                    write!(out, " {p:>width$}")?;
                }
                writeln!(out)?;
                for row in &sheet.rounds {
                    write!(out, "{:>5} {:>5}", row.round_index, row.card_count)?;
                    for t in &row.totals {
                        write!(out, " {t:>width$}")?;
                    }
                    writeln!(out)?;
                }
                writeln!(out)?;
            }
            for (player, score) in sheet.players.iter().zip(&totals) {
                writeln!(out, "{player:<width$} {score:>6}")?;
            }
            if let Some(i) = sheet.first_invalid_round {
                writeln!(out, "scoring stopped at invalid round {i}")?;
            }
            Ok(())
        }
    }
}
