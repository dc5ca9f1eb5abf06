//! Moves and their outcomes.

use crate::coordinates::Coordinates;
use crate::figure::Figure;
use crate::roster::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One proposed placement: where, by whom, with which figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Target cell.
    pub coordinates: Coordinates,
    /// The player making the move.
    pub player: Identity,
    /// The figure the mark is drawn with.
    pub figure: Figure,
}

impl Move {
    /// Creates a move.
    pub fn new(coordinates: Coordinates, player: Identity, figure: Figure) -> Self {
        Self {
            coordinates,
            player,
            figure,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} plays ({})", self.player.name, self.coordinates)
    }
}

/// Final classification of an accepted or terminal move attempt.
///
/// Invalid attempts that are still within the player's error tolerance have
/// no `MoveResult`; the referee reports them as a rejection to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move stands, the game goes on.
    Continue,
    /// The move completed a winning line.
    Win,
    /// The player exhausted the error tolerance and is out.
    Disqualified,
    /// No empty cell remains; the game is drawn.
    Deadlock,
}
