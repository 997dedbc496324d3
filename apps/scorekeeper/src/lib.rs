#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod telemetry;

// Re-exports for public API
pub use config::runtime::{LogFormat, OutputFormat, RuntimeConfig};
pub use domain::{
    calculate_scores, card_counts, is_valid_round, new_game, round_details, score_sheet, Game,
    Round, RoundDetails, Schedule, ScoreOutcome, ScoreSheet, SeatEntry,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
