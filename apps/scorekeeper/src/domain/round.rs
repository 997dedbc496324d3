//! Per-round bookkeeping and the rules a finished round must satisfy.

use serde::{Deserialize, Serialize};

use crate::domain::rules::valid_bid_range;
use crate::errors::domain::{DomainError, ValidationKind};

/// One seat's recorded bid and tricks for a round.
///
/// Values are signed so that out-of-range input survives deserialization
/// and is reported through [`RoundDetails::out_of_bounds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatEntry {
    pub bid: i32,
    pub taken: i32,
}

impl SeatEntry {
    pub fn new(bid: i32, taken: i32) -> Self {
        Self { bid, taken }
    }

    pub fn is_exact(&self) -> bool {
        self.bid == self.taken
    }
}

/// Entries for one round in seat-rotation order (seat 0 leads).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round(Vec<SeatEntry>);

impl Round {
    pub fn new(entries: Vec<SeatEntry>) -> Self {
        Self(entries)
    }

    /// A round with every bid and taken at zero.
    pub fn empty(seats: usize) -> Self {
        Self(vec![SeatEntry::default(); seats])
    }

    pub fn entries(&self) -> &[SeatEntry] {
        &self.0
    }

    pub fn seats(&self) -> usize {
        self.0.len()
    }

    /// Copy of this round with `seat` replaced.
    pub fn with_entry(&self, seat: usize, entry: SeatEntry) -> Result<Self, DomainError> {
        if seat >= self.0.len() {
            return Err(DomainError::validation(
                ValidationKind::OutOfRange,
                format!("seat {seat} in a round of {} seats", self.0.len()),
            ));
        }
        let mut entries = self.0.clone();
        entries[seat] = entry;
        Ok(Self(entries))
    }
}

impl From<Vec<SeatEntry>> for Round {
    fn from(entries: Vec<SeatEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<SeatEntry> for Round {
    fn from_iter<I: IntoIterator<Item = SeatEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Facts derived from one round's entries and its hand size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundDetails {
    /// Bid the last seat may not make.
    pub disallowed: i32,
    /// Set when the last seat's bid equals `disallowed`.
    pub incorrect_last_bid: bool,
    pub taken_total: i32,
    /// Set when `taken_total` differs from the hand size.
    pub invalid_taken_total: bool,
    /// Set when any bid or taken lies outside `0..=card_count`.
    pub out_of_bounds: bool,
}

/// A single failed check, for display by collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundViolation {
    /// Last seat bid the value that makes total bids equal the hand size.
    HookBid,
    /// Tricks taken do not add up to the hand size.
    TakenTotal,
    /// A bid or taken lies outside `0..=card_count`.
    OutOfBounds,
}

impl RoundDetails {
    pub fn violations(&self) -> Vec<RoundViolation> {
        let mut out = Vec::new();
        if self.incorrect_last_bid {
            out.push(RoundViolation::HookBid);
        }
        if self.invalid_taken_total {
            out.push(RoundViolation::TakenTotal);
        }
        if self.out_of_bounds {
            out.push(RoundViolation::OutOfBounds);
        }
        out
    }
}

/// Derive the rule checks for `round` dealt with `card_count` cards.
///
/// Precondition: the round has one entry per player. An empty round has no
/// last bidder, so `incorrect_last_bid` is false and `disallowed` is the
/// full hand size.
pub fn round_details(round: &Round, card_count: i32) -> RoundDetails {
    let entries = round.entries();
    let in_range = valid_bid_range(card_count);

    let out_of_bounds = entries
        .iter()
        .any(|e| !in_range.contains(&e.bid) || !in_range.contains(&e.taken));

    let (last, earlier) = match entries.split_last() {
        Some((last, earlier)) => (Some(last), earlier),
        None => (None, entries),
    };
    // Sums run in i64 so extreme entries cannot overflow; stored values saturate.
    let earlier_bids: i64 = earlier.iter().map(|e| i64::from(e.bid)).sum();
    let disallowed = i64::from(card_count) - earlier_bids;
    let incorrect_last_bid = last.is_some_and(|e| i64::from(e.bid) == disallowed);

    let taken_total: i64 = entries.iter().map(|e| i64::from(e.taken)).sum();

    RoundDetails {
        disallowed: saturate(disallowed),
        incorrect_last_bid,
        taken_total: saturate(taken_total),
        invalid_taken_total: taken_total != i64::from(card_count),
        out_of_bounds,
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

pub fn is_valid_round(details: &RoundDetails) -> bool {
    !(details.incorrect_last_bid || details.invalid_taken_total || details.out_of_bounds)
}

/// Bids `seat` may legally declare given the bids already in `round`.
///
/// Every seat may bid `0..=card_count`; the last seat additionally loses the
/// hook value. Returns an empty list for a seat outside the round.
pub fn legal_bids_for_seat(round: &Round, seat: usize, card_count: i32) -> Vec<i32> {
    let seats = round.seats();
    if seat >= seats {
        return Vec::new();
    }
    let range = valid_bid_range(card_count);
    if seat + 1 < seats {
        return range.collect();
    }
    let disallowed = round_details(round, card_count).disallowed;
    range.filter(|&b| b != disallowed).collect()
}
