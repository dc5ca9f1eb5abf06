//! Heuristic position scorer.
//!
//! Scores a board snapshot from one player's point of view. The score is
//! `+inf` when that player already holds a winning run, otherwise a finite
//! sum over every row, column and diagonal long enough to host a winning
//! line. Used by the greedy strategy to rank its candidate moves.

use crate::board::{Board, Cell};
use crate::coordinates::Coordinates;
use crate::roster::PlayerId;
use crate::rules::Rules;
use tracing::instrument;

/// Running tally over one scorable line.
///
/// Sweeps the line cell by cell and accumulates weight each time the open
/// window closes (an opposing mark, or the end of the line). Within a window
/// it tracks the total own-mark count and every contiguous chain of own
/// marks separately: a closed window of span `s` with chains `c1..cn` and
/// `m` marks in total is worth `sum(10^ci) + trunc((s - m - [m > 0]) / L)`
/// when `s >= L`, and nothing otherwise.
#[derive(Debug, Default)]
struct LineTally {
    /// Cells since the last reset that are empty or the analytic player's.
    span: u32,
    /// Own marks inside the current window.
    marks: u32,
    /// Closed chains of consecutive own marks inside the current window.
    chains: Vec<u32>,
    /// Length of the chain currently being extended.
    chain: u32,
    /// Accumulated weight of windows closed so far.
    weight: f64,
}

impl LineTally {
    fn new() -> Self {
        Self::default()
    }

    /// Feeds the next cell of the line.
    ///
    /// Returns true when the analytic player's chain reached the win length,
    /// i.e. the position is already won and scoring can stop.
    fn step(&mut self, cell: Cell, analytic: PlayerId, win_length: u32) -> bool {
        match cell {
            Cell::Empty => {
                self.span += 1;
                if self.chain > 0 {
                    self.chains.push(self.chain);
                    self.chain = 0;
                }
                false
            }
            Cell::Mark(id) if id == analytic => {
                self.chain += 1;
                if self.chain < win_length {
                    self.span += 1;
                    self.marks += 1;
                    false
                } else {
                    self.weight = f64::INFINITY;
                    true
                }
            }
            Cell::Mark(_) => {
                self.close(win_length);
                false
            }
        }
    }

    /// Closes the open window, banking its weight, and resets the counters.
    fn close(&mut self, win_length: u32) {
        if self.span >= win_length {
            if self.chain > 0 {
                self.weight += 10f64.powi(self.chain as i32);
            }
            for &chain in &self.chains {
                self.weight += 10f64.powi(chain as i32);
            }
            let occupied_gap = if self.marks == 0 { 0 } else { 1 };
            let leftover =
                (self.span as i64 - self.marks as i64 - occupied_gap) / win_length as i64;
            self.weight += leftover as f64;
        }
        self.span = 0;
        self.marks = 0;
        self.chains.clear();
        self.chain = 0;
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Scores `board` from the point of view of `analytic`.
///
/// `+inf` iff the analytic player already holds a contiguous run of
/// `win_line_length` own marks; otherwise a finite non-negative sum over all
/// scorable lines. Total over in-range inputs; never panics.
#[instrument(skip(board, rules))]
pub fn score_for(analytic: PlayerId, board: &Board, rules: &Rules) -> f64 {
    let width = board.width() as i32;
    let height = board.height() as i32;
    let win_length = rules.win_line_length() as u32;
    let win = rules.win_line_length() as i32;

    // Diagonals shorter than the win length can never host a winning run
    // and are skipped entirely. `diagonal_count` per orientation may be
    // zero or negative, in which case no diagonal qualifies.
    let diagonal_count = width + height - 2 * win + 1;
    let scorable_diagonals = if diagonal_count > 0 {
        diagonal_count as usize * 2
    } else {
        0
    };

    let mut columns: Vec<LineTally> = (0..width).map(|_| LineTally::new()).collect();
    let mut diagonals: Vec<LineTally> = (0..scorable_diagonals).map(|_| LineTally::new()).collect();

    let mut total = 0f64;
    for y in 0..height {
        let mut row = LineTally::new();
        for x in 0..width {
            let cell = board
                .at(Coordinates::new(x as u8, y as u8))
                .unwrap_or(Cell::Empty);
            if row.step(cell, analytic, win_length) {
                return f64::INFINITY;
            }
            if columns[x as usize].step(cell, analytic, win_length) {
                return f64::INFINITY;
            }
            if diagonal_count > 0 {
                // "\" diagonals occupy indices [0, diagonal_count),
                // "/" diagonals [diagonal_count, 2 * diagonal_count).
                let falling = x - y + height - win;
                if (0..diagonal_count).contains(&falling)
                    && diagonals[falling as usize].step(cell, analytic, win_length)
                {
                    return f64::INFINITY;
                }
                let rising = x + y + width + height - 3 * win + 2;
                if (diagonal_count..2 * diagonal_count).contains(&rising)
                    && diagonals[rising as usize].step(cell, analytic, win_length)
                {
                    return f64::INFINITY;
                }
            }
        }
        row.close(win_length);
        total += row.weight();
    }
    for mut column in columns {
        column.close(win_length);
        total += column.weight();
    }
    for mut diagonal in diagonals {
        diagonal.close(win_length);
        total += diagonal.weight();
    }
    total
}
