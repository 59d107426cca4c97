//! Roshambo Game Engine
//!
//! Platform-agnostic rock/paper/scissors outcome resolution.
//! This crate provides the resolver, its lookup table and a seeded computer
//! opponent without any UI or I/O dependencies.

pub mod choice;
pub mod config;
pub mod error;
pub mod opponent;
pub mod outcome;
pub mod resolver;
pub mod series;
pub mod table;

// Re-export commonly used types
pub use choice::Choice;
pub use config::{ConfigLoadError, MAX_SERIES_ROUNDS, SeriesConfig, SeriesConfigError};
pub use error::RoshamboError;
pub use opponent::ComputerOpponent;
pub use outcome::Outcome;
pub use resolver::{Round, play_round, resolve, resolve_names};
pub use series::{SeriesSummary, play_series};
pub use table::{OutcomeTable, PAIR_COUNT, TableEntry, TableError};
