use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::round::{Round, SeatEntry};
use crate::domain::rules::{PlayerCount, Schedule};
use crate::errors::domain::{DomainError, ValidationKind};

/// A complete game record: who plays, who leads round 0, and every round's
/// bids and tricks in seat-rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub players: Vec<String>,
    pub starting_player: usize,
    pub rounds: Vec<Round>,
}

/// Build an empty game (every bid and taken zero) and return its schedule.
pub fn new_game(
    players: Vec<String>,
    starting_player: usize,
) -> Result<(Game, Schedule), DomainError> {
    let seats = players.len();
    let rounds = PlayerCount::try_from(seats)?
        .schedule()
        .iter()
        .map(|_| Round::empty(seats))
        .collect();
    let game = Game {
        players,
        starting_player,
        rounds,
    };
    let schedule = game.validate_shape()?;

    if starting_player >= seats {
        return Err(DomainError::validation(
            ValidationKind::StartingPlayer,
            format!("starting player {starting_player} is not one of {seats} seats"),
        ));
    }

    Ok((game, schedule))
}

impl Game {
    pub fn player_count(&self) -> Result<PlayerCount, DomainError> {
        PlayerCount::try_from(self.players.len())
    }

    /// Check the structural preconditions scoring relies on and return the
    /// schedule for this table.
    ///
    /// Player names must be unique since scores are reported per seat. Fewer
    /// rounds than the schedule is fine (a game in progress); more is not, and
    /// every round must have one entry per player.
    pub fn validate_shape(&self) -> Result<Schedule, DomainError> {
        let schedule = self.player_count()?.schedule();

        let mut seen = HashSet::with_capacity(self.players.len());
        if let Some(dup) = self.players.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayer,
                format!("player {dup:?} is seated twice"),
            ));
        }

        if self.rounds.len() > schedule.len() {
            return Err(DomainError::validation(
                ValidationKind::TooManyRounds,
                format!(
                    "{} rounds recorded; {} players play {}",
                    self.rounds.len(),
                    self.players.len(),
                    schedule.len()
                ),
            ));
        }

        if let Some((i, round)) = self
            .rounds
            .iter()
            .enumerate()
            .find(|(_, r)| r.seats() != self.players.len())
        {
            return Err(DomainError::validation(
                ValidationKind::RoundShape,
                format!(
                    "round {i} has {} seats for {} players",
                    round.seats(),
                    self.players.len()
                ),
            ));
        }

        Ok(schedule)
    }

    /// Copy of this game with one seat of one round replaced.
    pub fn with_entry(
        &self,
        round_index: usize,
        seat: usize,
        entry: SeatEntry,
    ) -> Result<Self, DomainError> {
        let round = self.rounds.get(round_index).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::OutOfRange,
                format!("round {round_index} of {}", self.rounds.len()),
            )
        })?;
        let replaced = round.with_entry(seat, entry)?;

        let mut next = self.clone();
        next.rounds[round_index] = replaced;
        Ok(next)
    }

    /// Copy of this game with a whole round replaced.
    pub fn with_round(&self, round_index: usize, round: Round) -> Result<Self, DomainError> {
        if round_index >= self.rounds.len() {
            return Err(DomainError::validation(
                ValidationKind::OutOfRange,
                format!("round {round_index} of {}", self.rounds.len()),
            ));
        }
        let mut next = self.clone();
        next.rounds[round_index] = round;
        Ok(next)
    }
}
