//! The playing field.

use crate::coordinates::Coordinates;
use crate::error::BoardError;
use crate::figure::Figure;
use crate::roster::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No mark here yet.
    Empty,
    /// Marked by the player with this id.
    Mark(PlayerId),
}

impl Cell {
    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Rectangular grid of cells plus the set of player ids allowed on it.
///
/// The board knows nothing about turn order or win conditions; it only
/// guards cell access and remembers which figure belongs to which id so the
/// renderer can draw it. Cloning yields a fully independent copy, which is
/// how strategies and the evaluator get their throwaway snapshots.
#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
    figures: HashMap<PlayerId, Figure>,
}

impl Board {
    /// Creates an empty board of the given dimensions.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
            figures: HashMap::new(),
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Registers a player id as legal to place, with the figure drawn for it.
    pub fn register_figure(&mut self, id: PlayerId, figure: Figure) {
        self.figures.insert(id, figure);
    }

    /// Returns the figure registered for `id`, if any.
    pub fn figure_of(&self, id: PlayerId) -> Option<Figure> {
        self.figures.get(&id).copied()
    }

    /// Checks whether numeric coordinates fall on the board.
    pub fn contains(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height
    }

    /// Checks whether coordinates fall on the board.
    pub fn contains_coordinates(&self, coordinates: Coordinates) -> bool {
        self.contains(coordinates.x, coordinates.y)
    }

    /// Reads the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the board.
    pub fn at(&self, coordinates: Coordinates) -> Result<Cell, BoardError> {
        if !self.contains_coordinates(coordinates) {
            return Err(self.out_of_bounds(coordinates));
        }
        Ok(self.cells[self.index(coordinates)])
    }

    /// Writes the cell at the given coordinates.
    ///
    /// Placing [`Cell::Empty`] clears the cell; this is how the greedy
    /// strategy reverts a hypothetical move on its private snapshot. All
    /// mutation of the authoritative board goes through the referee.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the board and
    /// [`BoardError::UnknownPlayer`] when the id was never registered.
    pub fn place(&mut self, coordinates: Coordinates, cell: Cell) -> Result<(), BoardError> {
        if !self.contains_coordinates(coordinates) {
            return Err(self.out_of_bounds(coordinates));
        }
        if let Cell::Mark(id) = cell {
            if !self.figures.contains_key(&id) {
                return Err(BoardError::UnknownPlayer { id });
            }
        }
        let index = self.index(coordinates);
        self.cells[index] = cell;
        Ok(())
    }

    /// Finds the first empty cell in row-major order.
    pub fn first_empty(&self) -> Option<Coordinates> {
        self.cells.iter().position(Cell::is_empty).map(|i| {
            Coordinates::new(
                (i % self.width as usize) as u8,
                (i / self.width as usize) as u8,
            )
        })
    }

    /// Checks whether any empty cell remains.
    pub fn has_space(&self) -> bool {
        self.first_empty().is_some()
    }

    fn index(&self, coordinates: Coordinates) -> usize {
        coordinates.y as usize * self.width as usize + coordinates.x as usize
    }

    fn out_of_bounds(&self, coordinates: Coordinates) -> BoardError {
        BoardError::OutOfBounds {
            coordinates,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(width: u8, height: u8) -> (Board, PlayerId) {
        let mut roster = crate::roster::Roster::new();
        let handle = roster.allocate("tester").unwrap();
        let id = handle.id();
        let mut board = Board::new(width, height);
        board.register_figure(id, Figure::Cross);
        (board, id)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(board.at(Coordinates::new(x, y)).unwrap(), Cell::Empty);
            }
        }
        assert!(board.has_space());
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(3, 5);
        assert!(board.contains(2, 4));
        assert!(!board.contains(3, 0));
        assert!(!board.contains(0, 5));
        assert!(board.at(Coordinates::new(3, 0)).is_err());
    }

    #[test]
    fn test_place_and_read_back() {
        let (mut board, id) = marked(3, 3);
        let cell = Coordinates::new(1, 2);
        board.place(cell, Cell::Mark(id)).unwrap();
        assert_eq!(board.at(cell).unwrap(), Cell::Mark(id));
        board.place(cell, Cell::Empty).unwrap();
        assert_eq!(board.at(cell).unwrap(), Cell::Empty);
    }

    #[test]
    fn test_place_unregistered_id_rejected() {
        let mut board = Board::new(3, 3);
        let mut roster = crate::roster::Roster::new();
        let stranger = roster.allocate("stranger").unwrap();
        let err = board
            .place(Coordinates::new(0, 0), Cell::Mark(stranger.id()))
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::UnknownPlayer {
                id: stranger.id()
            }
        );
    }

    #[test]
    fn test_first_empty_row_major() {
        let (mut board, id) = marked(3, 3);
        assert_eq!(board.first_empty(), Some(Coordinates::new(0, 0)));
        board.place(Coordinates::new(0, 0), Cell::Mark(id)).unwrap();
        board.place(Coordinates::new(1, 0), Cell::Mark(id)).unwrap();
        assert_eq!(board.first_empty(), Some(Coordinates::new(2, 0)));
        board.place(Coordinates::new(2, 0), Cell::Mark(id)).unwrap();
        assert_eq!(board.first_empty(), Some(Coordinates::new(0, 1)));
    }

    #[test]
    fn test_full_board_has_no_space() {
        let (mut board, id) = marked(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                board.place(Coordinates::new(x, y), Cell::Mark(id)).unwrap();
            }
        }
        assert!(!board.has_space());
        assert_eq!(board.first_empty(), None);
    }

    #[test]
    fn test_clone_is_isolated() {
        let (mut board, id) = marked(3, 3);
        let snapshot = board.clone();
        board.place(Coordinates::new(1, 1), Cell::Mark(id)).unwrap();
        assert_eq!(snapshot.at(Coordinates::new(1, 1)).unwrap(), Cell::Empty);
        assert_eq!(
            board.at(Coordinates::new(1, 1)).unwrap(),
            Cell::Mark(id)
        );
    }
}
