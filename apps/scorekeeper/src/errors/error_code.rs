//! Error codes surfaced by the command line collaborator.
//!
//! All error codes are SCREAMING_SNAKE_CASE. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

use super::domain::ValidationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game record validation
    /// Player count outside 2..=6
    UnsupportedPlayerCount,
    /// Duplicate player name
    DuplicatePlayer,
    /// Starting player not seated
    InvalidStartingPlayer,
    /// Round seat count mismatch
    InvalidRoundShape,
    /// More rounds than the schedule allows
    TooManyRounds,
    /// Round/seat coordinate outside the record
    OutOfRange,

    // Boundary
    /// Configuration error
    ConfigError,
    /// Reading or writing a file failed
    IoError,
    /// Malformed JSON game record
    ParseError,
    /// Rendering output failed
    OutputError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedPlayerCount => "UNSUPPORTED_PLAYER_COUNT",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::InvalidStartingPlayer => "INVALID_STARTING_PLAYER",
            Self::InvalidRoundShape => "INVALID_ROUND_SHAPE",
            Self::TooManyRounds => "TOO_MANY_ROUNDS",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::ParseError => "PARSE_ERROR",
            Self::OutputError => "OUTPUT_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ValidationKind> for ErrorCode {
    fn from(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::UnsupportedPlayerCount => Self::UnsupportedPlayerCount,
            ValidationKind::DuplicatePlayer => Self::DuplicatePlayer,
            ValidationKind::StartingPlayer => Self::InvalidStartingPlayer,
            ValidationKind::RoundShape => Self::InvalidRoundShape,
            ValidationKind::TooManyRounds => Self::TooManyRounds,
            ValidationKind::OutOfRange => Self::OutOfRange,
        }
    }
}
