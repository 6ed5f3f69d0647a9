//! Board geometry: winning lines, the center, and the corners.
//!
//! Scan order matters. Rows come first, then columns, then diagonals, and
//! both win detection and the computer's tie-breaks follow this order.

use crate::Position;

/// A winning triple of cells.
pub type Line = [Position; 3];

/// The 8 winning lines in scan order.
pub static LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// The center cell (5).
pub const CENTER: Position = Position::Center;

/// The four corner cells (1, 3, 7, 9).
pub static CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];
