//! Game parameters and win detection.

use crate::board::{Board, Cell};
use crate::error::ConfigError;
use crate::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Lowest accepted board dimension and win-line length.
pub const MIN_DIMENSION: u8 = 3;
/// Highest accepted board dimension and win-line length.
pub const MAX_DIMENSION: u8 = 100;
/// Highest accepted error tolerance.
pub const MAX_ERRORS: u8 = 100;
/// Lowest accepted player count.
pub const MIN_PLAYERS: u8 = 2;
/// Highest accepted player count.
pub const MAX_PLAYERS: u8 = 5;

/// Immutable parameters of one game.
///
/// Constructed once per session and shared read-only; bounds-checking and
/// scoring geometry are derived from these fields. Two rule sets are equal
/// iff every field matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    board_width: u8,
    board_height: u8,
    win_line_length: u8,
    /// `None` means unlimited invalid attempts are tolerated.
    max_errors_allowed: Option<u8>,
    num_players: u8,
}

impl Rules {
    /// Creates a rule set, validating every parameter.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first out-of-range parameter.
    #[instrument]
    pub fn new(
        board_width: u8,
        board_height: u8,
        win_line_length: u8,
        max_errors_allowed: Option<u8>,
        num_players: u8,
    ) -> Result<Self, ConfigError> {
        let dimension_range = MIN_DIMENSION..=MAX_DIMENSION;
        if !dimension_range.contains(&board_width) {
            return Err(ConfigError::out_of_range(
                "board_width",
                board_width as i64,
                MIN_DIMENSION as i64,
                MAX_DIMENSION as i64,
            ));
        }
        if !dimension_range.contains(&board_height) {
            return Err(ConfigError::out_of_range(
                "board_height",
                board_height as i64,
                MIN_DIMENSION as i64,
                MAX_DIMENSION as i64,
            ));
        }
        if !dimension_range.contains(&win_line_length) {
            return Err(ConfigError::out_of_range(
                "win_line_length",
                win_line_length as i64,
                MIN_DIMENSION as i64,
                MAX_DIMENSION as i64,
            ));
        }
        if let Some(errors) = max_errors_allowed {
            if errors > MAX_ERRORS {
                return Err(ConfigError::out_of_range(
                    "max_errors_allowed",
                    errors as i64,
                    -1,
                    MAX_ERRORS as i64,
                ));
            }
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigError::out_of_range(
                "num_players",
                num_players as i64,
                MIN_PLAYERS as i64,
                MAX_PLAYERS as i64,
            ));
        }
        Ok(Self {
            board_width,
            board_height,
            win_line_length,
            max_errors_allowed,
            num_players,
        })
    }

    /// Classic tic-tac-toe: 3x3 board, three in a row, two players, ten
    /// tolerated errors.
    pub fn classic() -> Self {
        Self {
            board_width: 3,
            board_height: 3,
            win_line_length: 3,
            max_errors_allowed: Some(10),
            num_players: 2,
        }
    }

    /// Board width in cells.
    pub fn board_width(&self) -> u8 {
        self.board_width
    }

    /// Board height in cells.
    pub fn board_height(&self) -> u8 {
        self.board_height
    }

    /// Number of contiguous own figures that wins.
    pub fn win_line_length(&self) -> u8 {
        self.win_line_length
    }

    /// Invalid attempts tolerated before disqualification; `None` is
    /// unlimited.
    pub fn max_errors_allowed(&self) -> Option<u8> {
        self.max_errors_allowed
    }

    /// Number of players the game starts with.
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    /// Checks whether the last move completed a winning line.
    ///
    /// Scans the eight compass directions from the placed cell, counting
    /// strictly contiguous cells of the mover capped at the win length and
    /// the board edge. Each of the four axis totals (row, column, both
    /// diagonals) includes the placed cell itself; the move wins iff the
    /// best axis reaches the win length.
    #[instrument(skip(self, board), fields(coordinates = %last_move.coordinates))]
    pub fn is_winning_move(&self, last_move: &Move, board: &Board) -> bool {
        let width = board.width() as i32;
        let height = board.height() as i32;
        let move_x = last_move.coordinates.x as i32;
        let move_y = last_move.coordinates.y as i32;
        let own = Cell::Mark(last_move.player.id);

        // counts[dy + 1][dx + 1] holds the contiguous own-mark count in that
        // direction; the centre seed of 1 is the placed cell.
        let mut counts = [[0i32; 3]; 3];
        counts[1][1] = 1;
        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let mut reach = self.win_line_length as i32;
                match dx {
                    -1 => reach = reach.min(move_x),
                    1 => reach = reach.min((width - move_x - 1).max(0)),
                    _ => {}
                }
                match dy {
                    -1 => reach = reach.min(move_y),
                    1 => reach = reach.min((height - move_y - 1).max(0)),
                    _ => {}
                }
                for step in 1..=reach {
                    let probe = crate::coordinates::Coordinates::new(
                        (move_x + dx * step) as u8,
                        (move_y + dy * step) as u8,
                    );
                    if board.at(probe) != Ok(own) {
                        break;
                    }
                    counts[(dy + 1) as usize][(dx + 1) as usize] += 1;
                }
            }
        }

        let mut row = 0;
        let mut column = 0;
        let mut diagonal = 0;
        let mut antidiagonal = 0;
        for i in 0..3 {
            row += counts[1][i];
            column += counts[i][1];
            diagonal += counts[i][i];
            antidiagonal += counts[i][2 - i];
        }
        let best = row.max(column).max(diagonal).max(antidiagonal);
        best >= self.win_line_length as i32
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "board {}x{}, {} in a row to win, {} players, errors allowed: {}",
            self.board_width,
            self.board_height,
            self.win_line_length,
            self.num_players,
            match self.max_errors_allowed {
                Some(errors) => errors.to_string(),
                None => "unlimited".to_string(),
            }
        )
    }
}
