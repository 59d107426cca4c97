use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::error::RoshamboError;
use crate::outcome::Outcome;
use crate::table::OutcomeTable;

/// A single resolved throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub first: Choice,
    pub second: Choice,
    pub outcome: Outcome,
}

/// Classify a round from the first player's perspective.
#[must_use]
pub fn resolve(first: Choice, second: Choice) -> Outcome {
    OutcomeTable::standard().get(first, second)
}

/// Resolve a round given textual choices.
///
/// # Errors
///
/// Returns [`RoshamboError::InvalidChoice`] naming the first argument that is
/// not one of rock, paper or scissors.
pub fn resolve_names(first: &str, second: &str) -> Result<Outcome, RoshamboError> {
    let first: Choice = first.parse()?;
    let second: Choice = second.parse()?;
    Ok(resolve(first, second))
}

#[must_use]
pub fn play_round(first: Choice, second: Choice) -> Round {
    Round {
        first,
        second,
        outcome: resolve(first, second),
    }
}
