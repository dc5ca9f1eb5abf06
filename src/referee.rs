//! Turn validation and the disqualification state machine.

use crate::board::{Board, Cell};
use crate::coordinates::Coordinates;
use crate::error::BoardError;
use crate::moves::{Move, MoveResult};
use crate::roster::{Identity, PlayerId};
use crate::rules::Rules;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Why a move attempt was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objection {
    /// The coordinates point outside the board.
    OffBoard(Coordinates),
    /// The target cell is already occupied.
    CellTaken(Coordinates),
    /// The player offered no move although empty cells remain.
    NoMoveOffered,
}

/// A strike against a player's error tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warning {
    /// Errors recorded for the player so far this game.
    pub used: u32,
    /// Errors the rules tolerate before disqualification.
    pub allowed: u8,
}

/// The referee's verdict on one move attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Ruling {
    /// The attempt was accepted or terminal; the game state advanced.
    Settled(MoveResult),
    /// The attempt was invalid; the same player must be asked again.
    Rejected {
        /// Why the attempt was turned down.
        objection: Objection,
        /// The strike recorded against the player, when the tolerance is
        /// finite.
        warning: Option<Warning>,
    },
}

/// Validates moves, applies them to the board and tracks per-player error
/// counts.
///
/// Error counts accumulate over the whole game and are never decremented;
/// call [`Referee::review_rules`] at the start of each game to reset them.
/// A disqualified player's count is left untouched, since a disqualified
/// player is never asked to move again.
#[derive(Debug, Default)]
pub struct Referee {
    error_counts: HashMap<PlayerId, u32>,
}

impl Referee {
    /// Creates a referee with a clean slate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the per-player error counters for a new game.
    pub fn review_rules(&mut self, _rules: &Rules) {
        self.error_counts.clear();
    }

    /// Errors recorded against `id` so far this game.
    pub fn errors_for(&self, id: PlayerId) -> u32 {
        self.error_counts.get(&id).copied().unwrap_or(0)
    }

    /// Checks a move attempt and, if valid, fixes it on the board.
    ///
    /// `proposal` is `None` when the player had no move to offer. The board
    /// is mutated only for an accepted placement; every rejected attempt
    /// leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] if the mover's id was never
    /// registered on the board. That is a broken setup, not a game event.
    #[instrument(skip(self, board, rules), fields(player = %player.id))]
    pub fn commit_move(
        &mut self,
        player: &Identity,
        proposal: Option<&Move>,
        board: &mut Board,
        rules: &Rules,
    ) -> Result<Ruling, BoardError> {
        let mut outcome = None;
        let mut objection = None;
        match proposal {
            Some(attempt) => {
                let target = attempt.coordinates;
                if !board.contains_coordinates(target) {
                    objection = Some(Objection::OffBoard(target));
                } else if board.at(target)? != Cell::Empty {
                    objection = Some(Objection::CellTaken(target));
                } else {
                    board.place(target, Cell::Mark(player.id))?;
                    outcome = Some(if rules.is_winning_move(attempt, board) {
                        MoveResult::Win
                    } else if board.has_space() {
                        MoveResult::Continue
                    } else {
                        MoveResult::Deadlock
                    });
                    debug!(%attempt, "move accepted");
                }
            }
            None => {
                if board.has_space() {
                    objection = Some(Objection::NoMoveOffered);
                } else {
                    outcome = Some(MoveResult::Deadlock);
                }
            }
        }

        let Some(objection) = objection else {
            // Accepted or terminal: outcome is set on every path without an
            // objection.
            return Ok(Ruling::Settled(outcome.unwrap_or(MoveResult::Continue)));
        };

        match rules.max_errors_allowed() {
            Some(allowed) => {
                let count = self.error_counts.entry(player.id).or_insert(0);
                if *count < allowed as u32 {
                    *count += 1;
                    warn!(player = %player.id, used = *count, allowed, "invalid move, warning issued");
                    Ok(Ruling::Rejected {
                        objection,
                        warning: Some(Warning {
                            used: *count,
                            allowed,
                        }),
                    })
                } else {
                    warn!(player = %player.id, "error tolerance exhausted");
                    Ok(Ruling::Settled(MoveResult::Disqualified))
                }
            }
            None => Ok(Ruling::Rejected {
                objection,
                warning: None,
            }),
        }
    }
}
