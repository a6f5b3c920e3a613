//! Win detection.

use crate::Square;
use crate::board::Board;
use crate::mark::Mark;

/// The eight lines that win the game: rows, then columns, then diagonals.
pub const LINES: [[Square; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The first line (in `LINES` order) held entirely by one mark, with that mark.
///
/// Scans every line in order and stops at the first match, so a board where
/// both marks hold a line still yields a single deterministic answer.
pub fn winning_line(board: &Board) -> Option<(Mark, [Square; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.mark_at(a)?;
        if board.mark_at(b) == Some(mark) && board.mark_at(c) == Some(mark) {
            Some((mark, line))
        } else {
            None
        }
    })
}

/// The winning mark, if any line is complete.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// A full board with no winner.
///
/// Informational only: status reporting does not treat this as a terminal state.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
