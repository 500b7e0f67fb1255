// src/error.rs

use thiserror::Error;

/// Errors raised while building an inventory model.
///
/// Both kinds surface at construction time. A validly constructed model
/// can always be solved.
#[derive(Debug, Error)]
pub enum MdpError {
    /// Malformed or missing data: empty series, bad columns, negative demand.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A parameter outside its allowed range.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl MdpError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MdpError>;
