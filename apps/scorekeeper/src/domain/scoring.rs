use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::game::Game;
use crate::domain::round::{is_valid_round, round_details, SeatEntry};
use crate::domain::seating::seat_order;
use crate::errors::domain::DomainError;

pub const POINTS_PER_TRICK: i32 = 10;
pub const EXACT_BID_BONUS: i32 = 50;
pub const MISS_PENALTY_PER_TRICK: i32 = 10;

/// Final scores in `players` order plus the round scoring stopped at, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOutcome {
    pub scores: Vec<i32>,
    pub first_invalid_round: Option<usize>,
}

/// One scored round of a [`ScoreSheet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub round_index: usize,
    pub card_count: i32,
    /// Points gained or lost this round, in `players` order.
    pub deltas: Vec<i32>,
    /// Running totals after this round, in `players` order.
    pub totals: Vec<i32>,
}

/// Round-by-round breakdown of a game's scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSheet {
    pub players: Vec<String>,
    pub rounds: Vec<RoundScore>,
    pub first_invalid_round: Option<usize>,
}

impl ScoreSheet {
    /// Totals after the last scored round (zeros when nothing was scored).
    pub fn totals(&self) -> Vec<i32> {
        self.rounds
            .last()
            .map(|r| r.totals.clone())
            .unwrap_or_else(|| vec![0; self.players.len()])
    }
}

/// Points one seat earns for a round. Saturates on entries far outside any
/// hand size.
pub fn round_score_delta(entry: SeatEntry) -> i32 {
    if entry.is_exact() {
        entry
            .taken
            .saturating_mul(POINTS_PER_TRICK)
            .saturating_add(EXACT_BID_BONUS)
    } else {
        let miss = i64::from(entry.taken).abs_diff(i64::from(entry.bid));
        let penalty = i32::try_from(miss).unwrap_or(i32::MAX);
        penalty.saturating_mul(MISS_PENALTY_PER_TRICK).saturating_neg()
    }
}

/// Walk the rounds in order, handing each valid round's per-player deltas to
/// `on_round`. Stops at the first invalid round and returns its index.
fn walk_rounds(
    game: &Game,
    mut on_round: impl FnMut(usize, i32, &[i32]),
) -> Result<Option<usize>, DomainError> {
    let schedule = game.validate_shape()?;
    let players = game.players.len();
    let mut deltas = vec![0; players];

    for (i, round) in game.rounds.iter().enumerate() {
        let card_count = schedule[i];
        let details = round_details(round, card_count);
        if !is_valid_round(&details) {
            debug!(
                round = i,
                card_count,
                violations = ?details.violations(),
                "round failed validation; scoring halted"
            );
            return Ok(Some(i));
        }

        for (seat, player) in seat_order(players, game.starting_player, i)
            .into_iter()
            .enumerate()
        {
            deltas[player] = round_score_delta(round.entries()[seat]);
        }
        on_round(i, card_count, &deltas);
    }

    Ok(None)
}

/// Cumulative scores for `game`.
///
/// Scores are credited to players through the seat rotation, so each entry in
/// `scores` belongs to the player at the same index of `game.players`. The
/// first round that breaks the rules halts scoring: the returned scores
/// exclude it and every later round.
pub fn calculate_scores(game: &Game) -> Result<ScoreOutcome, DomainError> {
    let mut scores = vec![0; game.players.len()];
    let first_invalid_round = walk_rounds(game, |_, _, deltas| {
        for (total, delta) in scores.iter_mut().zip(deltas) {
            *total += delta;
        }
    })?;

    Ok(ScoreOutcome {
        scores,
        first_invalid_round,
    })
}

/// Round-by-round breakdown; stops where [`calculate_scores`] stops.
pub fn score_sheet(game: &Game) -> Result<ScoreSheet, DomainError> {
    let mut totals = vec![0; game.players.len()];
    let mut rounds = Vec::with_capacity(game.rounds.len());
    let first_invalid_round = walk_rounds(game, |round_index, card_count, deltas| {
        for (total, delta) in totals.iter_mut().zip(deltas) {
            *total += delta;
        }
        rounds.push(RoundScore {
            round_index,
            card_count,
            deltas: deltas.to_vec(),
            totals: totals.clone(),
        });
    })?;

    Ok(ScoreSheet {
        players: game.players.clone(),
        rounds,
        first_invalid_round,
    })
}
