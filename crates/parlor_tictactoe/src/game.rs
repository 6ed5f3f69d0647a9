//! Round and match orchestration between two move providers.

use crate::players::MoveProvider;
use crate::score::{RoundOutcome, ScoreTracker, Side};
use crate::{Board, Position};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

/// Something that happened at the table, for the front-end to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round is starting on an empty board.
    RoundStarted {
        /// Who moves first this round.
        first: Side,
    },
    /// A side marked a cell.
    MoveMade {
        /// Side that moved.
        side: Side,
        /// Cell that was marked.
        position: Position,
    },
    /// The round reached a terminal board.
    RoundOver(RoundOutcome),
    /// A side reached the match win threshold.
    MatchOver {
        /// The match winner.
        winner: Side,
    },
}

/// A match between a human and a computer provider.
///
/// Owns the board and the score. Each round alternates the two providers,
/// checking for a terminal board after every single move.
pub struct Match<H, C> {
    board: Board,
    score: ScoreTracker,
    human: H,
    computer: C,
    first_player: Side,
}

impl<H: MoveProvider, C: MoveProvider> Match<H, C> {
    /// Creates a match with an empty board and zeroed score.
    ///
    /// # Errors
    ///
    /// Fails if both providers play the same marker.
    ///
    /// Each provider is bound to the other's marker, overriding whatever
    /// opponent it was built with.
    #[instrument(skip(human, computer), fields(human = %human.name(), computer = %computer.name()))]
    pub fn new(mut human: H, mut computer: C, first_player: Side) -> Result<Self> {
        if human.marker() == computer.marker() {
            anyhow::bail!(
                "Both participants play {}; markers must be distinct",
                human.marker()
            );
        }
        human.set_opponent(computer.marker());
        computer.set_opponent(human.marker());
        Ok(Self {
            board: Board::new(),
            score: ScoreTracker::new(),
            human,
            computer,
            first_player,
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the running score.
    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// Returns the human provider.
    pub fn human(&self) -> &H {
        &self.human
    }

    /// Returns the computer provider.
    pub fn computer(&self) -> &C {
        &self.computer
    }

    /// Returns the display name of a side.
    pub fn name_of(&self, side: Side) -> &str {
        match side {
            Side::Human => self.human.name(),
            Side::Computer => self.computer.name(),
        }
    }

    /// Plays one round to a terminal board and records it.
    ///
    /// The board is cleared first, so this can be called back to back.
    /// `on_event` sees the match after each step; its errors abort the round.
    #[instrument(skip(self, on_event))]
    pub fn play_round(
        &mut self,
        on_event: &mut dyn FnMut(&Self, GameEvent) -> Result<()>,
    ) -> Result<RoundOutcome> {
        self.board.reset();
        let mut side = self.first_player;
        on_event(&*self, GameEvent::RoundStarted { first: side })?;

        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }

            let (position, marker) = match side {
                Side::Human => (self.human.next_move(&self.board)?, self.human.marker()),
                Side::Computer => (self.computer.next_move(&self.board)?, self.computer.marker()),
            };
            debug!(?side, cell = position.number(), "Applying move");
            self.board
                .assign(position, marker)
                .inspect_err(|e| warn!(?side, error = %e, "Provider returned an illegal move"))
                .with_context(|| format!("{} broke the move contract", self.name_of(side)))?;

            on_event(&*self, GameEvent::MoveMade { side, position })?;
            side = side.opponent();
        };

        self.score.record_round(outcome);
        info!(?outcome, "Round over");
        on_event(&*self, GameEvent::RoundOver(outcome))?;
        if let Some(winner) = self.score.match_winner() {
            info!(?winner, "Match over");
            on_event(&*self, GameEvent::MatchOver { winner })?;
        }
        Ok(outcome)
    }

    /// Plays rounds until a side reaches the match threshold.
    #[instrument(skip(self, on_event))]
    pub fn play_match(
        &mut self,
        on_event: &mut dyn FnMut(&Self, GameEvent) -> Result<()>,
    ) -> Result<Side> {
        loop {
            self.play_round(on_event)?;
            if let Some(winner) = self.score.match_winner() {
                return Ok(winner);
            }
        }
    }

    /// Clears the board and score for a rematch.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.score.reset();
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        RoundOutcome::from_board(&self.board, self.human.marker(), self.computer.marker())
    }
}
