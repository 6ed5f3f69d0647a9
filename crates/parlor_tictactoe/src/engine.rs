//! Heuristic move selection for the computer opponent.
//!
//! The engine walks a fixed priority chain and stops at the first rule that
//! yields a cell:
//!
//! 1. [`Rule::Win`]: complete one of its own near-complete lines.
//! 2. [`Rule::Center`]: take cell 5.
//! 3. [`Rule::Block`]: fill the open cell of an opponent threat.
//! 4. [`Rule::Corner`]: a random empty corner.
//! 5. [`Rule::Fallback`]: a random empty cell.
//!
//! There is no look-ahead, so a perfect opponent can beat it. Every rule
//! draws from [`Board::empty_cells`], so an occupied cell is never chosen.

use crate::lines::{CENTER, CORNERS};
use crate::{Board, Marker, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Rule of the priority chain that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// Completed a line of the engine's own marker.
    Win,
    /// Claimed the empty center.
    Center,
    /// Blocked an opponent's near-complete line.
    Block,
    /// Took a random empty corner.
    Corner,
    /// Took a random empty cell.
    Fallback,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that selected the cell.
    pub rule: Rule,
}

/// Picks the computer's next cell, or `None` when the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<Position> {
    decide(board, own, opponent, rng).map(|decision| decision.position)
}

/// Runs the priority chain and reports which rule fired.
#[instrument(skip(board, rng))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<Decision> {
    let decision = if let Some(&cell) = board.near_complete(own).first() {
        Decision::new(cell, Rule::Win)
    } else if board.is_empty(CENTER) {
        Decision::new(CENTER, Rule::Center)
    } else if let Some(&cell) = board.near_complete(opponent).first() {
        Decision::new(cell, Rule::Block)
    } else if let Some(&cell) = open_corners(board).choose(rng) {
        Decision::new(cell, Rule::Corner)
    } else {
        let cell = *board.empty_cells().choose(rng)?;
        Decision::new(cell, Rule::Fallback)
    };

    debug!(cell = decision.position.number(), rule = %decision.rule, "Computer chose move");
    Some(decision)
}

fn open_corners(board: &Board) -> Vec<Position> {
    CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}
