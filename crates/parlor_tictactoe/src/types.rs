//! Core domain types for tic-tac-toe.

use crate::error::{InvalidMove, MarkerError};
use crate::lines::LINES;
use crate::Position;
use tracing::{debug, instrument};

/// Symbol a participant writes into cells.
///
/// Markers are never blank, so a marked cell can always be told apart
/// from an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(pub(crate) char);

impl Marker {
    /// Creates a marker from a character.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::Blank`] for whitespace.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, MarkerError> {
        if symbol.is_whitespace() {
            return Err(MarkerError::Blank(symbol));
        }
        Ok(Self(symbol))
    }

    /// Returns the marker's character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a participant's marker.
    Marked(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns every empty cell in ascending order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Checks if the board is full.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns the marker of the first uniformly marked line in scan order.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Marker> {
        LINES.iter().find_map(|&[a, b, c]| {
            let marker = self.get(a).marker()?;
            (self.get(b) == Square::Marked(marker) && self.get(c) == Square::Marked(marker))
                .then_some(marker)
        })
    }

    /// Returns the open cell of every line where `marker` holds the other two.
    ///
    /// Cells appear in line scan order, each at most once. For the mover's
    /// own marker these are winning opportunities; for the opponent's they
    /// are threats to block.
    #[instrument(skip(self))]
    pub fn near_complete(&self, marker: Marker) -> Vec<Position> {
        let mut cells = Vec::new();
        for line in &LINES {
            let held = line
                .iter()
                .filter(|&&pos| self.get(pos) == Square::Marked(marker))
                .count();
            if held != 2 {
                continue;
            }
            if let Some(&open) = line.iter().find(|&&pos| self.is_empty(pos))
                && !cells.contains(&open)
            {
                cells.push(open);
            }
        }
        cells
    }

    /// Writes `marker` into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::Occupied`] if the cell already holds a marker;
    /// the board is left unchanged.
    #[instrument(skip(self))]
    pub fn assign(&mut self, pos: Position, marker: Marker) -> Result<(), InvalidMove> {
        if !self.is_empty(pos) {
            debug!(cell = pos.number(), "Rejected move onto occupied cell");
            return Err(InvalidMove::Occupied(pos));
        }
        self.squares[pos.to_index()] = Square::Marked(marker);
        Ok(())
    }

    /// Writes `marker` into the cell with the given number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for numbers outside 1-9 and
    /// [`InvalidMove::Occupied`] for occupied cells.
    #[instrument(skip(self))]
    pub fn assign_number(&mut self, number: u8, marker: Marker) -> Result<(), InvalidMove> {
        let pos = Position::from_number(number).ok_or(InvalidMove::OutOfRange(number))?;
        self.assign(pos, marker)
    }

    /// Clears every cell for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = |pos: Position| match self.get(pos) {
            Square::Empty => ' ',
            Square::Marked(marker) => marker.symbol(),
        };
        for (row, cells) in Position::ALL.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----+-----+-----")?;
            }
            writeln!(f, "     |     |")?;
            writeln!(
                f,
                "  {}  |  {}  |  {}",
                symbol(cells[0]),
                symbol(cells[1]),
                symbol(cells[2])
            )?;
            writeln!(f, "     |     |")?;
        }
        Ok(())
    }
}
