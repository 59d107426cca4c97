//! Immutable lookup table from ordered choice pairs to outcomes.
//!
//! The table is stored flat, one cell per ordered `(first, second)` pair, and
//! is validated for exhaustiveness whenever it is assembled.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::choice::Choice;
use crate::outcome::Outcome;

/// Number of ordered pairs over the choice alphabet.
pub const PAIR_COUNT: usize = Choice::ALL.len() * Choice::ALL.len();

/// A single row of an outcome table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub first: Choice,
    pub second: Choice,
    pub outcome: Outcome,
}

impl TableEntry {
    #[must_use]
    pub const fn new(first: Choice, second: Choice, outcome: Outcome) -> Self {
        Self {
            first,
            second,
            outcome,
        }
    }
}

/// Errors raised when an explicit table does not describe a fair game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("outcome table is missing the pair ({first}, {second})")]
    MissingPair { first: Choice, second: Choice },
    #[error("outcome table lists the pair ({first}, {second}) more than once")]
    DuplicatePair { first: Choice, second: Choice },
    #[error("outcome for ({choice}, {choice}) must be tie (got {outcome})")]
    NonTieDiagonal { choice: Choice, outcome: Outcome },
    #[error(
        "outcomes for ({first}, {second}) and ({second}, {first}) must be one win and one loss (got {forward} and {reverse})"
    )]
    Asymmetric {
        first: Choice,
        second: Choice,
        forward: Outcome,
        reverse: Outcome,
    },
    #[error("{choice} must beat exactly one other choice (beats {wins})")]
    Unbalanced { choice: Choice, wins: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTable {
    cells: [Outcome; PAIR_COUNT],
}

const fn slot(first: Choice, second: Choice) -> usize {
    first.index() * Choice::ALL.len() + second.index()
}

impl OutcomeTable {
    /// Process-wide standard table, built on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        static TABLE: OnceLock<OutcomeTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let table = Self::from_cycle();
            log::debug!("built standard outcome table ({PAIR_COUNT} pairs)");
            table
        })
    }

    /// Derive every cell from the rock > scissors > paper > rock cycle.
    #[must_use]
    pub fn from_cycle() -> Self {
        let mut cells = [Outcome::Tie; PAIR_COUNT];
        for first in Choice::ALL {
            for second in Choice::ALL {
                cells[slot(first, second)] = if first == second {
                    Outcome::Tie
                } else if first.beats() == second {
                    Outcome::Win
                } else {
                    Outcome::Lose
                };
            }
        }
        Self { cells }
    }

    /// Assemble a table from explicit rows, checking that all nine pairs are
    /// present exactly once and form a fair cycle.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] describing the first violation found.
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = TableEntry>,
    {
        let mut seen: [Option<Outcome>; PAIR_COUNT] = [None; PAIR_COUNT];
        for entry in entries {
            let cell = &mut seen[slot(entry.first, entry.second)];
            if cell.is_some() {
                return Err(TableError::DuplicatePair {
                    first: entry.first,
                    second: entry.second,
                });
            }
            *cell = Some(entry.outcome);
        }

        let mut cells = [Outcome::Tie; PAIR_COUNT];
        for first in Choice::ALL {
            for second in Choice::ALL {
                let idx = slot(first, second);
                cells[idx] = seen[idx].ok_or(TableError::MissingPair { first, second })?;
            }
        }

        let table = Self { cells };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), TableError> {
        for first in Choice::ALL {
            let diagonal = self.get(first, first);
            if diagonal != Outcome::Tie {
                return Err(TableError::NonTieDiagonal {
                    choice: first,
                    outcome: diagonal,
                });
            }
            for second in Choice::ALL.into_iter().filter(|second| first < *second) {
                let forward = self.get(first, second);
                let reverse = self.get(second, first);
                if forward == Outcome::Tie || reverse != forward.inverse() {
                    return Err(TableError::Asymmetric {
                        first,
                        second,
                        forward,
                        reverse,
                    });
                }
            }
        }

        for choice in Choice::ALL {
            let wins = Choice::ALL
                .into_iter()
                .filter(|other| self.get(choice, *other) == Outcome::Win)
                .count();
            if wins != 1 {
                return Err(TableError::Unbalanced { choice, wins });
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn get(&self, first: Choice, second: Choice) -> Outcome {
        self.cells[slot(first, second)]
    }

    /// All rows in `Choice::ALL` order, first player major.
    pub fn entries(&self) -> impl Iterator<Item = TableEntry> + '_ {
        Choice::ALL.into_iter().flat_map(move |first| {
            Choice::ALL
                .into_iter()
                .map(move |second| TableEntry::new(first, second, self.get(first, second)))
        })
    }
}
