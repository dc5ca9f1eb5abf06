//! Mostly-random move source.

use super::{Proposal, Strategy};
use crate::board::{Board, Cell};
use crate::coordinates::Coordinates;
use crate::figure::Figure;
use crate::moves::Move;
use crate::roster::{Identity, PlayerId};
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// Uniform random samples before falling back to the first empty cell.
const RANDOM_TRIES: u32 = 10;

/// Picks an empty cell mostly at random.
///
/// Samples uniform coordinates up to a fixed retry budget; if every sample
/// lands on an occupied cell, takes the first empty cell in row-major order
/// instead.
#[derive(Debug, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn make_move(
        &mut self,
        board: Board,
        _active: &[PlayerId],
        me: &Identity,
        figure: Figure,
    ) -> Result<Proposal> {
        let Some(fallback) = board.first_empty() else {
            return Ok(Proposal::Stumped);
        };
        let mut rng = rand::rng();
        let mut choice = fallback;
        for _ in 0..RANDOM_TRIES {
            let sample = Coordinates::new(
                rng.random_range(0..board.width()),
                rng.random_range(0..board.height()),
            );
            if board.at(sample) == Ok(Cell::Empty) {
                choice = sample;
                break;
            }
        }
        debug!(player = %me.id, cell = %choice, "random strategy chose");
        Ok(Proposal::Play(Move::new(choice, me.clone(), figure)))
    }
}
