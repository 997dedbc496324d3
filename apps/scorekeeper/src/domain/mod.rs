//! Domain layer: pure scoring logic types and helpers.

pub mod game;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seating;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_scoring;

// Re-exports for ergonomics
pub use game::{new_game, Game};
pub use round::{
    is_valid_round, legal_bids_for_seat, round_details, Round, RoundDetails, RoundViolation,
    SeatEntry,
};
pub use rules::{card_counts, hand_size_for_round, valid_bid_range, PlayerCount, Schedule};
pub use scoring::{
    calculate_scores, round_score_delta, score_sheet, RoundScore, ScoreOutcome, ScoreSheet,
};
pub use seating::{rotate_left, seat_order};
