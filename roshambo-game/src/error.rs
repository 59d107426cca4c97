//! Top-level error type for the roshambo engine.

use thiserror::Error;

use crate::config::SeriesConfigError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoshamboError {
    #[error("invalid choice '{value}' (expected one of: rock, paper, scissors)")]
    InvalidChoice { value: String },
    #[error(transparent)]
    Config(#[from] SeriesConfigError),
}
