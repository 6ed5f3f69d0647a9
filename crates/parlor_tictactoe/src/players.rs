//! Move providers: anything that can pick a cell for its side.

use crate::engine;
use crate::participant::Participant;
use crate::{Board, Marker, Position};
use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// A participant that can choose cells.
///
/// The human side implements this over console input and the computer side
/// over [`engine::choose_move`]. Implementations must return a cell from
/// [`Board::empty_cells`].
pub trait MoveProvider {
    /// Chooses the next cell to mark.
    ///
    /// Only called while the board has an empty cell.
    fn next_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// Returns the marker this participant plays.
    fn marker(&self) -> Marker;

    /// Binds the marker this participant plays against.
    ///
    /// [`Match::new`](crate::Match::new) calls this for both sides, so a
    /// provider never plays against a stale marker. The default ignores it.
    fn set_opponent(&mut self, _opponent: Marker) {}
}

impl<P: MoveProvider + ?Sized> MoveProvider for Box<P> {
    fn next_move(&mut self, board: &Board) -> Result<Position> {
        (**self).next_move(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn marker(&self) -> Marker {
        (**self).marker()
    }

    fn set_opponent(&mut self, opponent: Marker) {
        (**self).set_opponent(opponent)
    }
}

/// Computer opponent driven by the heuristic decision engine.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R = ChaCha8Rng> {
    identity: Participant,
    opponent: Marker,
    rng: R,
}

impl ComputerPlayer<ChaCha8Rng> {
    /// Creates a computer player with a seeded random source.
    #[instrument]
    pub fn seeded(identity: Participant, opponent: Marker, seed: u64) -> Self {
        Self::with_rng(identity, opponent, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> ComputerPlayer<R> {
    /// Creates a computer player drawing tie-breaks from `rng`.
    pub fn with_rng(identity: Participant, opponent: Marker, rng: R) -> Self {
        Self {
            identity,
            opponent,
            rng,
        }
    }
}

impl<R: rand::Rng> MoveProvider for ComputerPlayer<R> {
    #[instrument(skip(self, board), fields(computer = %self.identity.name()))]
    fn next_move(&mut self, board: &Board) -> Result<Position> {
        let position = engine::choose_move(
            board,
            self.identity.marker(),
            self.opponent,
            &mut self.rng,
        )
        .ok_or_else(|| anyhow::anyhow!("No move available: board is full"))?;
        debug!(cell = position.number(), "Computer move ready");
        Ok(position)
    }

    fn name(&self) -> &str {
        self.identity.name()
    }

    fn marker(&self) -> Marker {
        self.identity.marker()
    }

    fn set_opponent(&mut self, opponent: Marker) {
        debug!(%opponent, "Computer opponent bound");
        self.opponent = opponent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer() -> ComputerPlayer {
        let identity = Participant::new("Blasty".to_string(), Marker::new('O').unwrap());
        ComputerPlayer::seeded(identity, Marker::new('X').unwrap(), 3)
    }

    #[test]
    fn test_computer_opens_in_center() {
        let mut player = computer();
        assert_eq!(player.next_move(&Board::new()).unwrap(), Position::Center);
    }

    #[test]
    fn test_computer_errors_on_full_board() {
        let mut board = Board::new();
        let x = Marker::new('X').unwrap();
        for pos in Position::ALL {
            board.assign(pos, x).unwrap();
        }
        assert!(computer().next_move(&board).is_err());
    }

    #[test]
    fn test_set_opponent_retargets_blocking() {
        // X threatens 3 along the top row; Z holds nothing.
        let mut board = Board::new();
        let x = Marker::new('X').unwrap();
        board.assign(Position::Center, Marker::new('O').unwrap()).unwrap();
        board.assign(Position::TopLeft, x).unwrap();
        board.assign(Position::TopCenter, x).unwrap();

        let identity = Participant::new("Blasty".to_string(), Marker::new('O').unwrap());
        let mut player = ComputerPlayer::seeded(identity, Marker::new('Z').unwrap(), 3);
        player.set_opponent(x);
        assert_eq!(player.next_move(&board).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_boxed_provider_delegates() {
        let mut boxed: Box<dyn MoveProvider> = Box::new(computer());
        assert_eq!(boxed.name(), "Blasty");
        assert_eq!(boxed.marker().symbol(), 'O');
        assert_eq!(boxed.next_move(&Board::new()).unwrap(), Position::Center);
    }
}
