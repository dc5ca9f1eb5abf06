//! Player strategies: the move-producing half of a player.

mod greedy;
mod human;
mod random;

pub use greedy::GreedyStrategy;
pub use human::HumanStrategy;
pub use random::RandomStrategy;

use crate::board::Board;
use crate::figure::Figure;
use crate::moves::Move;
use crate::roster::{Identity, PlayerId};
use crate::rules::Rules;
use anyhow::Result;
use std::fmt;

/// What a strategy came up with for its turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Proposal {
    /// The move to attempt.
    Play(Move),
    /// The strategy has no move to offer.
    Stumped,
    /// The user asked to leave the game; unwind the session without
    /// further notifications.
    Quit,
}

/// A source of moves for one player.
///
/// Strategies see only throwaway board snapshots; mutating the snapshot
/// never touches the authoritative board. The notification hooks default to
/// no-ops, mirroring how little most strategies care about the rest of the
/// game.
pub trait Strategy {
    /// Called once before the game starts, with the rules and the initial
    /// turn order.
    fn review_rules(&mut self, _rules: &Rules, _player_order: &[PlayerId]) {}

    /// Produces the strategy's move for the current position.
    ///
    /// `board` is a private snapshot the strategy may scribble on, `active`
    /// lists the still-active players in turn order, `me` and `figure` are
    /// the player's own identity and marker.
    fn make_move(
        &mut self,
        board: Board,
        active: &[PlayerId],
        me: &Identity,
        figure: Figure,
    ) -> Result<Proposal>;

    /// A player won the game.
    fn on_win(&mut self, _winner: PlayerId) {}

    /// The game ended with no winner.
    fn on_deadlock(&mut self) {}

    /// A player was disqualified; `remaining` is the new turn order.
    fn on_disqualification(&mut self, _removed: PlayerId, _remaining: &[PlayerId]) {}
}

/// The kinds of players offered at game setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum PlayerKind {
    /// A person at the console.
    Human,
    /// Computer: mostly random placement.
    Random,
    /// Computer: greedy one-ply evaluation.
    Clever,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerKind::Human => "Human",
            PlayerKind::Random => "Computer: random shooter",
            PlayerKind::Clever => "Computer: clever",
        };
        write!(f, "{label}")
    }
}
