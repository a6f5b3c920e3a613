use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Square;
use crate::board::Board;
use crate::mark::Mark;
use crate::rules;

/// Headline shown above the move list.
///
/// A full board without a line still reports the next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl Status {
    pub fn of(board: &Board, x_is_next: bool) -> Self {
        match rules::winner(board) {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(Mark::for_turn(x_is_next)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// One selectable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub step: usize,
    pub label: String,
}

impl MoveEntry {
    pub fn new(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        MoveEntry { step, label }
    }
}

/// Everything the view layer needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub board: Board,
    pub step: usize,
    pub winner: Option<Mark>,
    pub winning_line: Option<[Square; 3]>,
    pub status: String,
    pub is_draw: bool,
    pub moves: Vec<MoveEntry>,
}

impl View {
    /// Project the snapshot at `step` of `history` for display.
    /// `step` must index into `history`.
    pub(crate) fn project(history: &[Board], step: usize, x_is_next: bool) -> Self {
        let board = history[step];
        let line = rules::winning_line(&board);

        View {
            board,
            step,
            winner: line.map(|(mark, _)| mark),
            winning_line: line.map(|(_, squares)| squares),
            status: Status::of(&board, x_is_next).to_string(),
            is_draw: rules::is_draw(&board),
            moves: (0..history.len()).map(MoveEntry::new).collect(),
        }
    }
}
