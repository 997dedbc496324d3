#![allow(dead_code)]


use scorekeeper::domain::{Round, SeatEntry};
use scorekeeper::Game;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

/// Build a round from `(bid, taken)` pairs in seat order.
pub fn round(entries: &[(i32, i32)]) -> Round {
    entries
        .iter()
        .map(|&(bid, taken)| SeatEntry { bid, taken })
        .collect()
}

pub fn game(players: &[&str], starting_player: usize, rounds: Vec<Round>) -> Game {
    Game {
        players: players.iter().map(|p| p.to_string()).collect(),
        starting_player,
        rounds,
    }
}
