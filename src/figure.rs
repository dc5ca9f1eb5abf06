//! Figures players mark the board with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The visual symbol a player places on the board.
///
/// Orthogonal to the game logic: cells store player ids, figures only matter
/// when the board is drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Figure {
    /// ╳
    Cross,
    /// ⭘
    Nought,
    /// ⛤
    Star,
    /// ⛔
    Stop,
    /// ✅
    Check,
}

impl Figure {
    /// Returns the character drawn on the board for this figure.
    pub fn glyph(&self) -> char {
        match self {
            Figure::Cross => '\u{2573}',
            Figure::Nought => '\u{2B58}',
            Figure::Star => '\u{26E4}',
            Figure::Stop => '\u{26D4}',
            Figure::Check => '\u{2705}',
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
