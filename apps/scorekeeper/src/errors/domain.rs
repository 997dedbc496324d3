//! Domain-level error type.
//!
//! Only structural problems with a game record are errors. A round whose
//! bids or tricks break the rules is reported as data through
//! `RoundDetails` and the aggregator's halt index, never through this type.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which structural precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Player count outside the supported 2..=6 range
    UnsupportedPlayerCount,
    /// Same player name appears twice
    DuplicatePlayer,
    /// Starting player index is not a seat at the table
    StartingPlayer,
    /// A round's seat count differs from the player count
    RoundShape,
    /// More rounds recorded than the schedule has
    TooManyRounds,
    /// Round or seat coordinate outside the record
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Game record does not satisfy a structural precondition
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn kind(&self) -> ValidationKind {
        match self {
            DomainError::Validation(kind, _) => *kind,
        }
    }
}
