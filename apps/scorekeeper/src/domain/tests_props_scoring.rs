//! Property tests for score aggregation (pure domain).

use proptest::prelude::*;

use crate::domain::game::Game;
use crate::domain::round::{is_valid_round, round_details, Round};
use crate::domain::rules::card_counts;
use crate::domain::scoring::{calculate_scores, round_score_delta, score_sheet};
use crate::domain::seating::seat_order;
use crate::domain::{test_gens, test_prelude};

/// A table plus a prefix of valid rounds from its schedule.
fn valid_game() -> impl Strategy<Value = Game> {
    (test_gens::player_count(), 0usize..8, 0usize..12).prop_flat_map(|(n, start, len)| {
        let schedule = card_counts(n).unwrap_or_default();
        let rounds: Vec<_> = schedule[..len.min(schedule.len())]
            .iter()
            .map(|&c| test_gens::valid_round(n, c))
            .collect();
        rounds.prop_map(move |rounds| Game {
            players: test_gens::players(n),
            starting_player: start,
            rounds,
        })
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every valid round is applied; totals equal the sum of seat deltas
    /// credited through the rotation.
    #[test]
    fn prop_valid_games_score_every_round(game in valid_game()) {
        let outcome = calculate_scores(&game).expect("well-formed game");
        prop_assert_eq!(outcome.first_invalid_round, None);

        let n = game.players.len();
        let mut expected = vec![0; n];
        for (i, round) in game.rounds.iter().enumerate() {
            for (seat, player) in seat_order(n, game.starting_player, i).into_iter().enumerate() {
                expected[player] += round_score_delta(round.entries()[seat]);
            }
        }
        prop_assert_eq!(outcome.scores, expected);
    }

    /// Property: exact rounds add taken*10 + 50, misses subtract |taken-bid|*10.
    #[test]
    fn prop_single_round_delta_matches_rule(
        (n, start, round) in (test_gens::player_count(), 0usize..6).prop_flat_map(|(n, start)| {
            (Just(n), Just(start), test_gens::valid_round(n, 1))
        }),
    ) {
        let game = Game {
            players: test_gens::players(n),
            starting_player: start,
            rounds: vec![round.clone()],
        };
        let scores = calculate_scores(&game).expect("well-formed game").scores;
        for (seat, player) in seat_order(n, start, 0).into_iter().enumerate() {
            let e = round.entries()[seat];
            let expected = if e.taken == e.bid {
                e.taken * 10 + 50
            } else {
                -(e.taken - e.bid).abs() * 10
            };
            prop_assert_eq!(scores[player], expected);
        }
    }

    /// Property: breaking one round halts there and keeps the earlier totals.
    #[test]
    fn prop_invalid_round_halts(
        (game, broken) in valid_game()
            .prop_filter("need a round to break", |g| !g.rounds.is_empty())
            .prop_flat_map(|g| {
                let len = g.rounds.len();
                (Just(g), 0..len)
            }),
    ) {
        let n = game.players.len();
        let mut rounds = game.rounds.clone();
        rounds[broken] = Round::empty(n); // zero tricks taken never matches the hand size
        let damaged = Game { rounds, ..game.clone() };

        let prefix = Game { rounds: game.rounds[..broken].to_vec(), ..game.clone() };
        let outcome = calculate_scores(&damaged).expect("well-formed game");
        let schedule = card_counts(n).unwrap_or_default();
        prop_assert!(!is_valid_round(&round_details(&damaged.rounds[broken], schedule[broken])));
        prop_assert_eq!(outcome.first_invalid_round, Some(broken));
        prop_assert_eq!(outcome.scores, calculate_scores(&prefix).expect("prefix").scores);
    }

    /// Property: the score sheet ends at the same totals as calculate_scores.
    #[test]
    fn prop_sheet_agrees_with_totals(game in valid_game()) {
        let sheet = score_sheet(&game).expect("well-formed game");
        let outcome = calculate_scores(&game).expect("well-formed game");
        prop_assert_eq!(sheet.rounds.len(), game.rounds.len());
        prop_assert_eq!(sheet.totals(), outcome.scores);
        prop_assert_eq!(sheet.first_invalid_round, outcome.first_invalid_round);
    }
}
