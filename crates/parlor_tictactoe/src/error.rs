//! Error types for board mutation and marker construction.

use crate::Position;

/// Error returned when a mark cannot be placed.
///
/// Both variants mean the caller broke the move contract: the orchestrator
/// only forwards validated human moves and the computer only picks empty
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),

    /// The cell number is outside 1-9.
    #[display("Cell {} is out of range (must be 1-9)", _0)]
    OutOfRange(u8),
}

impl std::error::Error for InvalidMove {}

/// Error returned when a character cannot be used as a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MarkerError {
    /// No symbol was given.
    #[display("No marker given")]
    Empty,

    /// Whitespace is indistinguishable from an empty cell on screen.
    #[display("Marker {:?} is blank", _0)]
    Blank(char),

    /// The marker is not one of the symbols offered to this side.
    #[display("Marker {:?} is not available", _0)]
    Unavailable(char),
}

impl std::error::Error for MarkerError {}
