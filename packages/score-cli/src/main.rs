//! Score CLI - schedules, round checks and scoreboards for recorded games.
//!
//! Game records are JSON files in the shape produced by `score-cli new`.

mod input;
mod output;
mod types;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scorekeeper::telemetry::init_tracing;
use scorekeeper::{
    card_counts, new_game, score_sheet, AppError, DomainError, OutputFormat, RuntimeConfig,
    ValidationKind,
};
use tracing::{error, info};
use types::FormatArg;

#[derive(Parser)]
#[command(name = "score-cli")]
#[command(about = "Score trick-taking games recorded as JSON")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (defaults to SCOREKEEPER_FORMAT, then table)
    #[arg(long, global = true)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the hand size of every round for a player count
    Schedule {
        /// Number of players (2-6)
        players: usize,
    },
    /// Print an empty game record for the given players
    New {
        /// Player names in seating order
        #[arg(required = true, num_args = 2..)]
        names: Vec<String>,

        /// Index of the player who leads round 0
        #[arg(long, default_value = "0")]
        starting: usize,
    },
    /// Report rule checks for every recorded round
    Check {
        /// Game record (JSON)
        file: PathBuf,
    },
    /// Compute scores, stopping at the first invalid round
    Score {
        /// Game record (JSON)
        file: PathBuf,

        /// Include running totals for every scored round
        #[arg(long)]
        breakdown: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", e.code());
            return ExitCode::FAILURE;
        }
    };

    let filter = if args.verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    init_tracing(filter, config.log_format);

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output_format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(args.command, format, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), "{e}");
            eprintln!("{}: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(command: Command, format: OutputFormat, out: &mut W) -> Result<(), AppError> {
    match command {
        Command::Schedule { players } => {
            let schedule = card_counts(players).ok_or_else(|| {
                AppError::from(DomainError::validation(
                    ValidationKind::UnsupportedPlayerCount,
                    format!("{players} players"),
                ))
            })?;
            output::write_schedule(out, players, schedule, format)
        }
        Command::New { names, starting } => {
            let (game, schedule) = new_game(names, starting)?;
            info!(
                players = game.players.len(),
                rounds = schedule.len(),
                "created empty game"
            );
            serde_json::to_writer_pretty(&mut *out, &game)?;
            writeln!(out)?;
            Ok(())
        }
        Command::Check { file } => {
            let (game, schedule) = input::load_game(&file)?;
            let checks = output::check_rounds(&game, schedule);
            let invalid = checks.iter().filter(|c| !c.valid).count();
            info!(rounds = checks.len(), invalid, "checked rounds");
            output::write_checks(out, &checks, format)
        }
        Command::Score { file, breakdown } => {
            let (game, _) = input::load_game(&file)?;
            let sheet = score_sheet(&game)?;
            if let Some(i) = sheet.first_invalid_round {
                info!(round = i, "scoring halted at invalid round");
            }
            output::write_scores(out, &sheet, breakdown, format)
        }
    }
}
