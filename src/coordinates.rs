//! Cell coordinates and the letter form of the x axis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates of a cell on the board.
///
/// `x` runs left to right and is shown to the player as a base-26 letter
/// string (`a`, `b`, .., `z`, `ba`, ..); `y` runs top to bottom and is shown
/// as a decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// Column index, zero-based.
    pub x: u8,
    /// Row index, zero-based.
    pub y: u8,
}

impl Coordinates {
    /// Creates coordinates from numeric column and row indices.
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column in its letter form.
    pub fn x_letters(&self) -> String {
        index_to_letters(self.x as usize)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x_letters(), self.y)
    }
}

/// Converts a zero-based column index to its letter form.
///
/// The letter form is the base-26 rendering of the index with `a` as the zero
/// digit, so `0 -> "a"`, `25 -> "z"`, `26 -> "ba"`, `90 -> "dm"`.
pub fn index_to_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = index;
    loop {
        letters.push(b'a' + (rest % 26) as u8);
        rest /= 26;
        if rest == 0 {
            break;
        }
    }
    letters.reverse();
    // Only ASCII letters are pushed above.
    String::from_utf8(letters).unwrap_or_default()
}

/// Converts a letter-form column back to its zero-based index.
///
/// Inverse of [`index_to_letters`]. Returns `None` for an empty string or any
/// character outside `a`-`z` (case-insensitive).
pub fn letters_to_index(letters: &str) -> Option<usize> {
    let cleaned = letters.trim().to_ascii_lowercase();
    if cleaned.is_empty() {
        return None;
    }
    let mut index: usize = 0;
    for c in cleaned.bytes() {
        if !c.is_ascii_lowercase() {
            return None;
        }
        index = index.checked_mul(26)?.checked_add((c - b'a') as usize)?;
    }
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_letters() {
        assert_eq!(index_to_letters(0), "a");
        assert_eq!(index_to_letters(1), "b");
        assert_eq!(index_to_letters(25), "z");
        assert_eq!(index_to_letters(26), "ba");
        assert_eq!(index_to_letters(90), "dm");
        assert_eq!(index_to_letters(298), "lm");
    }

    #[test]
    fn test_letters_to_index() {
        assert_eq!(letters_to_index("a"), Some(0));
        assert_eq!(letters_to_index("z"), Some(25));
        assert_eq!(letters_to_index("ba"), Some(26));
        assert_eq!(letters_to_index("dm"), Some(90));
        assert_eq!(letters_to_index("lm"), Some(298));
        assert_eq!(letters_to_index("  DM "), Some(90));
    }

    #[test]
    fn test_letters_round_trip() {
        for index in 0..1000 {
            assert_eq!(letters_to_index(&index_to_letters(index)), Some(index));
        }
    }

    #[test]
    fn test_letters_rejects_garbage() {
        assert_eq!(letters_to_index(""), None);
        assert_eq!(letters_to_index("   "), None);
        assert_eq!(letters_to_index("a1"), None);
        assert_eq!(letters_to_index("-"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinates::new(0, 0).to_string(), "a,0");
        assert_eq!(Coordinates::new(27, 12).to_string(), "bb,12");
    }
}
