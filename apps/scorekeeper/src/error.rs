use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

/// Boundary error for collaborators that load, score and render games.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid game record: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Output error: {detail}")]
    Output { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => err.kind().into(),
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Parse(_) => ErrorCode::ParseError,
            AppError::Output { .. } => ErrorCode::OutputError,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn output(detail: impl Into<String>) -> Self {
        Self::Output {
            detail: detail.into(),
        }
    }
}
