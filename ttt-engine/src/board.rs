use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::TicTacToeError;
use crate::mark::Mark;
use crate::{NUM_SQUARES, SIDE, Square};

/// One immutable 3x3 board configuration, stored row-major as a flat array.
///
/// Cells hold `Mark::to_int` values, 0 for empty. A board is a plain `Copy`
/// value: committing a move produces a new board via [`Board::with_mark`]
/// and never touches the one it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i8; 9]", into = "[i8; 9]")]
pub struct Board {
    cells: [i8; NUM_SQUARES],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cell values. Values are normalized by sign.
    pub fn from_cells(cells: [i8; NUM_SQUARES]) -> Self {
        Board {
            cells: cells.map(i8::signum),
        }
    }

    // -- Accessors --

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn on_board(&self, sq: Square) -> bool {
        sq < NUM_SQUARES
    }

    pub fn mark_at(&self, sq: Square) -> Option<Mark> {
        if self.on_board(sq) {
            Mark::from_int(self.cells[sq])
        } else {
            None
        }
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.mark_at(sq).is_some()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    pub fn count_of(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == mark.to_int()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == NUM_SQUARES
    }

    pub fn empty_squares(&self) -> ArrayVec<Square, NUM_SQUARES> {
        (0..NUM_SQUARES).filter(|&sq| self.cells[sq] == 0).collect()
    }

    // -- Moves --

    /// Copy of this board with `mark` placed on `sq`.
    pub fn with_mark(&self, sq: Square, mark: Mark) -> Result<Board, TicTacToeError> {
        if !self.on_board(sq) {
            return Err(TicTacToeError::NotOnBoard(sq));
        }
        if self.is_occupied(sq) {
            return Err(TicTacToeError::Occupied(sq));
        }

        let mut next = *self;
        next.cells[sq] = mark.to_int();
        Ok(next)
    }

    /// The single square that differs from `prev`, if exactly one does.
    pub fn changed_square(&self, prev: &Board) -> Option<Square> {
        let mut diff = (0..NUM_SQUARES).filter(|&sq| self.cells[sq] != prev.cells[sq]);
        match (diff.next(), diff.next()) {
            (Some(sq), None) => Some(sq),
            _ => None,
        }
    }
}

impl From<[i8; NUM_SQUARES]> for Board {
    fn from(cells: [i8; NUM_SQUARES]) -> Self {
        Board::from_cells(cells)
    }
}

impl From<Board> for [i8; NUM_SQUARES] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(SIDE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                let ch = Mark::from_int(c).map_or(".", Mark::letter);
                f.write_str(ch)?;
            }
        }
        Ok(())
    }
}
