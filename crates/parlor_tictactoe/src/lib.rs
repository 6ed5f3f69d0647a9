//! Parlor tic-tac-toe - board model, heuristic opponent, and match scoring
//!
//! # Architecture
//!
//! - **Board**: nine cells, win and threat detection over the eight lines
//! - **Engine**: priority-chain move selection for the computer
//! - **Score**: round outcomes counted up to the match threshold
//! - **Players**: the [`MoveProvider`] seam shared by human and computer
//! - **Game**: [`Match`], the alternating turn loop
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Board, Marker, Position, choose_move};
//! use rand::SeedableRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let human = Marker::new('X')?;
//! let computer = Marker::new('O')?;
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//!
//! let board = Board::new();
//! assert_eq!(choose_move(&board, computer, human, &mut rng), Some(Position::Center));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod game;
mod lines;
mod participant;
mod players;
mod position;
mod score;
mod types;

// Crate-level exports - Board geometry
pub use lines::{CENTER, CORNERS, LINES, Line};
pub use position::Position;

// Crate-level exports - Board and errors
pub use error::{InvalidMove, MarkerError};
pub use types::{Board, Marker, Square};

// Crate-level exports - Computer opponent
pub use engine::{Decision, Rule, choose_move, decide};

// Crate-level exports - Scoring
pub use score::{MATCH_WIN_THRESHOLD, RoundOutcome, ScoreTracker, Side};

// Crate-level exports - Participants and orchestration
pub use game::{GameEvent, Match};
pub use participant::{COMPUTER_MARKERS, COMPUTER_NAMES, HUMAN_MARKERS, Participant, human_marker};
pub use players::{ComputerPlayer, MoveProvider};
