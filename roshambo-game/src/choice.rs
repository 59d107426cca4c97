use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoshamboError;

/// One of the three hands a player can throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Every choice, in table order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// The choice this one defeats.
    #[must_use]
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// Position of this choice in [`Choice::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Rock => 0,
            Self::Paper => 1,
            Self::Scissors => 2,
        }
    }

    /// Comma-separated list of the accepted textual names.
    #[must_use]
    pub fn accepted_names() -> String {
        Self::ALL
            .iter()
            .map(|choice| choice.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = RoshamboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| token.eq_ignore_ascii_case(choice.as_str()))
            .ok_or_else(|| RoshamboError::InvalidChoice {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("rock".parse::<Choice>().unwrap(), Choice::Rock);
        assert_eq!("Paper".parse::<Choice>().unwrap(), Choice::Paper);
        assert_eq!("  SCISSORS ".parse::<Choice>().unwrap(), Choice::Scissors);
    }

    #[test]
    fn rejects_values_outside_the_alphabet() {
        for bad in ["lizard", "", "rocks", "r", "spock"] {
            let err = bad.parse::<Choice>().unwrap_err();
            assert_eq!(
                err,
                RoshamboError::InvalidChoice {
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn every_choice_beats_exactly_one_other() {
        for choice in Choice::ALL {
            assert_ne!(choice.beats(), choice);
            assert_ne!(choice.beats().beats(), choice);
            assert_eq!(choice.beats().beats().beats(), choice);
        }
    }

    #[test]
    fn index_matches_table_order() {
        for (idx, choice) in Choice::ALL.into_iter().enumerate() {
            assert_eq!(choice.index(), idx);
        }
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Choice::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
        let back: Choice = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(back, Choice::Paper);
        assert_eq!(Choice::accepted_names(), "rock, paper, scissors");
    }
}
