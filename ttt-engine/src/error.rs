use std::fmt;

use crate::Square;
use crate::mark::Mark;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    NotOnBoard(Square),
    Occupied(Square),
    GameOver(Mark),
    StepOutOfRange { step: usize, len: usize },
    InvalidHistory(String),
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::NotOnBoard(sq) => write!(f, "square {sq} is not on the board"),
            TicTacToeError::Occupied(sq) => write!(f, "square {sq} is already taken"),
            TicTacToeError::GameOver(winner) => write!(f, "game over, {winner} won"),
            TicTacToeError::StepOutOfRange { step, len } => {
                write!(f, "step {step} out of range for history of length {len}")
            }
            TicTacToeError::InvalidHistory(reason) => write!(f, "invalid history: {reason}"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
