//! Participant identities and the marker and name rosters they draw from.

use crate::error::MarkerError;
use crate::Marker;
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Markers the human may pick from.
pub const HUMAN_MARKERS: [char; 5] = ['X', 'Y', 'T', 'Z', 'G'];

/// Markers the computer draws from. Disjoint from [`HUMAN_MARKERS`].
pub const COMPUTER_MARKERS: [char; 6] = ['O', 'U', 'P', 'B', 'A', 'C'];

/// Names the computer draws from.
pub const COMPUTER_NAMES: [&str; 4] = ["Blasty", "ASUS12", "CPRENG", "DLA34"];

/// A named participant and the marker they play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct Participant {
    /// Display name.
    name: String,
    /// Marker written into claimed cells.
    #[getter(copy)]
    marker: Marker,
}

impl Participant {
    /// Creates a computer participant with a random name and marker.
    #[instrument(skip(rng))]
    pub fn random_computer<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = COMPUTER_NAMES.choose(rng).copied().unwrap_or(COMPUTER_NAMES[0]);
        let symbol = COMPUTER_MARKERS
            .choose(rng)
            .copied()
            .unwrap_or(COMPUTER_MARKERS[0]);
        debug!(name, %symbol, "Computer identity drawn");
        Self {
            name: name.to_string(),
            marker: Marker(symbol),
        }
    }
}

/// Parses a human's marker choice, case-insensitively.
///
/// # Errors
///
/// Returns [`MarkerError::Empty`] for empty input and
/// [`MarkerError::Unavailable`] for symbols outside [`HUMAN_MARKERS`].
#[instrument]
pub fn human_marker(input: &str) -> Result<Marker, MarkerError> {
    let mut chars = input.trim().chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_ascii_uppercase(),
        (None, _) => return Err(MarkerError::Empty),
        (Some(c), Some(_)) => return Err(MarkerError::Unavailable(c)),
    };
    if !HUMAN_MARKERS.contains(&symbol) {
        return Err(MarkerError::Unavailable(symbol));
    }
    Marker::new(symbol)
}
