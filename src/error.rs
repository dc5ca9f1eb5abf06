//! Error taxonomy for the game engine.

use crate::coordinates::Coordinates;
use crate::roster::PlayerId;
use derive_more::{Display, Error};

/// A rule parameter was outside its allowed range.
///
/// Rejected before a game starts; a constructed [`crate::Rules`] is always
/// in range.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{} = {} is out of range {}..={}", field, value, min, max)]
pub struct ConfigError {
    /// Name of the offending parameter.
    pub field: &'static str,
    /// The rejected value.
    pub value: i64,
    /// Lowest accepted value.
    pub min: i64,
    /// Highest accepted value.
    pub max: i64,
}

impl ConfigError {
    /// Builds an out-of-range report for `field`.
    pub fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self {
            field,
            value,
            min,
            max,
        }
    }
}

/// Board access failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates point outside the board.
    #[display("coordinates {} are off the {}x{} board", coordinates, width, height)]
    OutOfBounds {
        /// The rejected coordinates.
        coordinates: Coordinates,
        /// Board width at the time of the access.
        width: u8,
        /// Board height at the time of the access.
        height: u8,
    },
    /// A mark was placed for an id the board has never been told about.
    /// This is a programming error, not a recoverable game event.
    #[display("player id {} is not registered on this board", id)]
    UnknownPlayer {
        /// The unregistered id.
        id: PlayerId,
    },
}

/// Player identity pool failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RosterError {
    /// All identities are in use; game setup cannot proceed.
    #[display("no free player ids left in the roster")]
    Exhausted,
    /// A handle was returned to a roster that never issued it.
    #[display("player id {} was not issued by this roster", id)]
    ForeignHandle {
        /// The id carried by the stray handle.
        id: PlayerId,
    },
}
