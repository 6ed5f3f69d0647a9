//! Round outcomes and match scoring.

use crate::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Round wins needed to take the match.
pub const MATCH_WIN_THRESHOLD: u32 = 5;

/// One of the two participants at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The person at the keyboard.
    #[default]
    Human,
    /// The heuristic opponent.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// A side completed a line.
    Won(Side),
    /// The board filled with no completed line.
    Tie,
}

impl RoundOutcome {
    /// Evaluates a board, returning `None` while the round is still open.
    ///
    /// A winning marker that belongs to neither side is scored as a tie.
    #[instrument(skip(board))]
    pub fn from_board(board: &Board, human: Marker, computer: Marker) -> Option<Self> {
        match board.winner() {
            Some(marker) if marker == human => Some(RoundOutcome::Won(Side::Human)),
            Some(marker) if marker == computer => Some(RoundOutcome::Won(Side::Computer)),
            Some(marker) => {
                warn!(%marker, "Winning marker belongs to neither side");
                Some(RoundOutcome::Tie)
            }
            None if board.is_full() => Some(RoundOutcome::Tie),
            None => None,
        }
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side) => Some(side),
            RoundOutcome::Tie => None,
        }
    }
}

/// Running tally of round outcomes across a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    human_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl ScoreTracker {
    /// Creates a tracker with all counters at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Rounds won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Counts one finished round.
    #[instrument(skip(self))]
    pub fn record_round(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won(Side::Human) => self.human_wins += 1,
            RoundOutcome::Won(Side::Computer) => self.computer_wins += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
        info!(
            human = self.human_wins,
            computer = self.computer_wins,
            ties = self.ties,
            "Round recorded"
        );
    }

    /// Returns the side that has reached [`MATCH_WIN_THRESHOLD`].
    ///
    /// Check after every [`record_round`](Self::record_round): rounds are
    /// recorded one at a time, so only one side can get there first. If
    /// both counters are at the threshold the human is reported.
    #[instrument(skip(self))]
    pub fn match_winner(&self) -> Option<Side> {
        if self.human_wins >= MATCH_WIN_THRESHOLD {
            Some(Side::Human)
        } else if self.computer_wins >= MATCH_WIN_THRESHOLD {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// True once either side has won the match.
    pub fn is_match_over(&self) -> bool {
        self.match_winner().is_some()
    }

    /// Zeroes all counters for a new match.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
