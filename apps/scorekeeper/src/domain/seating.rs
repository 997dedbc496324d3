//! Mapping from a round's storage order to the players at the table.
//!
//! Round entries are stored in seat-rotation order: seat 0 is whoever acts
//! first that round. The first actor moves one place left every round,
//! starting from the game's starting player.

/// `items` rotated left by `amount` (taken modulo the length).
pub fn rotate_left<T: Clone>(items: &[T], amount: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let n = items.len();
    (0..n).map(|i| items[(i + amount) % n].clone()).collect()
}

/// Player index seated at each seat for `round_index`.
///
/// `seat_order(n, start, i)[k]` is the index into `players` whose result is
/// stored at `round[k]`.
pub fn seat_order(player_count: usize, starting_player: usize, round_index: usize) -> Vec<usize> {
    if player_count == 0 {
        return Vec::new();
    }
    let shift = (round_index % player_count + starting_player % player_count) % player_count;
    (0..player_count)
        .map(|seat| (seat + shift) % player_count)
        .collect()
}
