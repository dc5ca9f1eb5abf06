//! One-ply greedy move source built on the position evaluator.

use super::{Proposal, Strategy};
use crate::board::{Board, Cell};
use crate::coordinates::Coordinates;
use crate::evaluator::score_for;
use crate::figure::Figure;
use crate::moves::Move;
use crate::roster::{Identity, PlayerId};
use crate::rules::Rules;
use anyhow::Result;
use rand::Rng;
use tracing::{debug, warn};

/// Tries every empty cell on a private snapshot, scores the result from its
/// own perspective and plays one of the best-scoring cells (ties broken
/// uniformly at random).
///
/// Looks exactly one ply ahead: it takes a win it can reach this turn but
/// cannot see the opponent's reply.
#[derive(Debug, Default)]
pub struct GreedyStrategy {
    rules: Option<Rules>,
}

impl GreedyStrategy {
    /// Creates the strategy; it learns the rules via
    /// [`Strategy::review_rules`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for GreedyStrategy {
    fn review_rules(&mut self, rules: &Rules, _player_order: &[PlayerId]) {
        self.rules = Some(rules.clone());
    }

    fn make_move(
        &mut self,
        mut board: Board,
        _active: &[PlayerId],
        me: &Identity,
        figure: Figure,
    ) -> Result<Proposal> {
        let Some(rules) = self.rules.clone() else {
            warn!(player = %me.id, "greedy strategy was never shown the rules");
            return Ok(Proposal::Stumped);
        };
        let mut best = f64::NEG_INFINITY;
        let mut candidates: Vec<Coordinates> = Vec::new();
        for y in 0..board.height() {
            for x in 0..board.width() {
                let cell = Coordinates::new(x, y);
                if board.at(cell)? != Cell::Empty {
                    continue;
                }
                board.place(cell, Cell::Mark(me.id))?;
                let score = score_for(me.id, &board, &rules);
                board.place(cell, Cell::Empty)?;
                if score > best {
                    best = score;
                    candidates.clear();
                    candidates.push(cell);
                } else if score == best {
                    candidates.push(cell);
                }
            }
        }
        if candidates.is_empty() {
            return Ok(Proposal::Stumped);
        }
        let choice = candidates[rand::rng().random_range(0..candidates.len())];
        debug!(player = %me.id, cell = %choice, score = best, "greedy strategy chose");
        Ok(Proposal::Play(Move::new(choice, me.clone(), figure)))
    }
}
