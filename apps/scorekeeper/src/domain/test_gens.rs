// Proptest generators for domain types.
// Generators build valid rounds by construction so properties rarely need
// prop_assume!.

use proptest::prelude::*;

use crate::domain::round::{Round, SeatEntry};
use crate::domain::rules::{card_counts, MAX_PLAYERS, MIN_PLAYERS};

pub fn player_count() -> impl Strategy<Value = usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// Distinct player names for a table of `n`.
pub fn players(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

/// A player count together with one of its hand sizes.
pub fn table_and_hand() -> impl Strategy<Value = (usize, i32)> {
    player_count().prop_flat_map(|n| {
        let schedule = card_counts(n).unwrap_or_default();
        (Just(n), proptest::sample::select(schedule.to_vec()))
    })
}

/// Split `total` tricks over `seats` seats.
pub fn taken_split(seats: usize, total: i32) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0..=seats.saturating_sub(1), total as usize).prop_map(move |winners| {
        let mut taken = vec![0; seats];
        for w in winners {
            taken[w] += 1;
        }
        taken
    })
}

/// Any in-bounds round: bids anywhere in range, tricks adding up to the hand.
/// May still break the hook rule.
pub fn in_bounds_round(seats: usize, card_count: i32) -> impl Strategy<Value = Round> {
    (
        proptest::collection::vec(0..=card_count, seats),
        taken_split(seats, card_count),
    )
        .prop_map(|(bids, taken)| {
            bids.into_iter()
                .zip(taken)
                .map(|(bid, taken)| SeatEntry { bid, taken })
                .collect::<Round>()
        })
}

/// A round that passes every check.
pub fn valid_round(seats: usize, card_count: i32) -> impl Strategy<Value = Round> {
    in_bounds_round(seats, card_count).prop_map(move |round| fix_hook(round, card_count))
}

/// Nudge the last bid off the hook value, staying within `0..=card_count`.
pub fn fix_hook(round: Round, card_count: i32) -> Round {
    let entries = round.entries();
    let Some((last, earlier)) = entries.split_last() else {
        return round;
    };
    let disallowed = card_count - earlier.iter().map(|e| e.bid).sum::<i32>();
    if last.bid != disallowed {
        return round;
    }
    let bid = if last.bid < card_count {
        last.bid + 1
    } else {
        last.bid - 1
    };
    let mut fixed = entries.to_vec();
    fixed[entries.len() - 1].bid = bid;
    Round::new(fixed)
}
