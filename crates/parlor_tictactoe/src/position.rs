//! The nine cells of the board.

use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Cells are numbered 1-9 in row-major order, which is also how they are
/// presented to the human player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Zero-based index into the board's square array.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Cell number as shown to players (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates a position from a zero-based array index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a cell number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::from_index(usize::from(index)))
    }

    /// Parses a cell number typed by a player, ignoring surrounding whitespace.
    #[instrument]
    pub fn parse_number(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_number)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numbers_are_one_based_row_major() {
        assert_eq!(Position::TopLeft.number(), 1);
        assert_eq!(Position::Center.number(), 5);
        assert_eq!(Position::BottomRight.number(), 9);
    }

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(1), Some(Position::TopLeft));
        assert_eq!(Position::from_number(9), Some(Position::BottomRight));
        assert_eq!(Position::from_number(10), None);
    }

    #[test]
    fn test_all_matches_enum_order() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Position::parse_number(" 5\n"), Some(Position::Center));
        assert_eq!(Position::parse_number("ten"), None);
        assert_eq!(Position::parse_number("-1"), None);
        assert_eq!(Position::parse_number("0"), None);
    }
}
