//! Multi-round play against the computer opponent.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::opponent::ComputerOpponent;
use crate::outcome::Outcome;
use crate::resolver::{Round, play_round};

/// Running tally of a series, from the player's side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub rounds: Vec<Round>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl SeriesSummary {
    pub fn record(&mut self, round: Round) {
        match round.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.rounds.push(round);
    }

    #[must_use]
    pub fn verdict(&self) -> Outcome {
        match self.wins.cmp(&self.losses) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Lose,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    #[must_use]
    pub fn played(&self) -> usize {
        self.rounds.len()
    }
}

/// Play one round per player choice against successive opponent picks.
#[must_use]
pub fn play_series(player: &[Choice], opponent: &mut ComputerOpponent) -> SeriesSummary {
    let mut summary = SeriesSummary::default();
    for &first in player {
        summary.record(play_round(first, opponent.pick()));
    }
    log::debug!(
        "series finished: {} rounds, {}W/{}L/{}T",
        summary.played(),
        summary.wins,
        summary.losses,
        summary.ties
    );
    summary
}
