use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
/// Largest hand dealt in any round, independent of player count.
pub const MAX_HAND_SIZE: i32 = 8;
/// Rounds spent ramping 2..=7 on the way up and 7..=2 on the way down.
pub const RAMP_ROUNDS: usize = 6;

/// Cards dealt per round, indexed by round.
pub type Schedule = &'static [i32];

/// Number of players at the table, restricted to the supported 2..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PlayerCount(u8);

impl PlayerCount {
    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn schedule(self) -> Schedule {
        // Construction guarantees the index is in range.
        &SCHEDULES[self.get() - MIN_PLAYERS]
    }

    pub fn all() -> impl Iterator<Item = PlayerCount> {
        (MIN_PLAYERS..=MAX_PLAYERS).map(|n| PlayerCount(n as u8))
    }
}

impl TryFrom<usize> for PlayerCount {
    type Error = DomainError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            Ok(PlayerCount(n as u8))
        } else {
            Err(DomainError::validation(
                ValidationKind::UnsupportedPlayerCount,
                format!("{n} players; supported range is {MIN_PLAYERS}..={MAX_PLAYERS}"),
            ))
        }
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> Self {
        count.get()
    }
}

// Schedule shape: n×1, 2..=7, n×8, 7..=2, n×1.
fn build_schedule(players: usize) -> Vec<i32> {
    let ramp_up = (0..RAMP_ROUNDS as i32).map(|i| i + 2);
    let ramp_down = (0..RAMP_ROUNDS as i32).map(|i| MAX_HAND_SIZE - i - 1);

    let mut counts = Vec::with_capacity(3 * players + 2 * RAMP_ROUNDS);
    counts.extend(std::iter::repeat(1).take(players));
    counts.extend(ramp_up);
    counts.extend(std::iter::repeat(MAX_HAND_SIZE).take(players));
    counts.extend(ramp_down);
    counts.extend(std::iter::repeat(1).take(players));
    counts
}

static SCHEDULES: Lazy<[Vec<i32>; MAX_PLAYERS - MIN_PLAYERS + 1]> = Lazy::new(|| {
    [
        build_schedule(2),
        build_schedule(3),
        build_schedule(4),
        build_schedule(5),
        build_schedule(6),
    ]
});

/// Hand sizes for every round of a game with `player_count` players.
///
/// Returns `None` for unsupported player counts; callers must reject those
/// before building a game.
pub fn card_counts(player_count: usize) -> Option<Schedule> {
    PlayerCount::try_from(player_count)
        .ok()
        .map(PlayerCount::schedule)
}

/// Hand size for a 0-based round index.
pub fn hand_size_for_round(player_count: usize, round_index: usize) -> Option<i32> {
    card_counts(player_count)?.get(round_index).copied()
}

pub fn valid_bid_range(card_count: i32) -> RangeInclusive<i32> {
    0..=card_count
}
