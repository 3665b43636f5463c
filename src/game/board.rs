use std::fmt;

use crate::CELLS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags apply when centering in a cell
        match self {
            Mark::X => f.pad("X"),
            Mark::O => f.pad("O"),
        }
    }
}

pub type Cell = Option<Mark>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Copy of the board with `index` marked, or `None` if the cell is
    /// already taken. Marked cells never revert except via a full reset.
    pub fn with_move(&self, index: usize, mark: Mark) -> Option<Board> {
        if self.cells[index].is_some() {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Some(next)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_on_empty_cell_marks_it() {
        let board = Board::new();
        let next = board.with_move(4, Mark::X).unwrap();
        assert_eq!(next.get(4), Some(Mark::X));
        // the source board is untouched
        assert_eq!(board.get(4), None);
    }

    #[test]
    fn move_on_taken_cell_is_rejected() {
        let board = Board::new().with_move(0, Mark::X).unwrap();
        assert!(board.with_move(0, Mark::O).is_none());
        assert_eq!(board.get(0), Some(Mark::X));
    }

    #[test]
    fn full_board_detection() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for i in 0..CELLS {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board = board.with_move(i, mark).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn opposite_flips_marks() {
        assert_eq!(Mark::X.opposite(), Mark::O);
        assert_eq!(Mark::O.opposite(), Mark::X);
    }
}
