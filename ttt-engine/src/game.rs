use crate::Square;
use crate::board::Board;
use crate::error::TicTacToeError;
use crate::event::Event;
use crate::mark::Mark;
use crate::rules;
use crate::view::{Status, View};

/// Board history with a cursor selecting the displayed snapshot.
///
/// `history[0]` is always the empty board and every later snapshot adds one
/// mark to its predecessor. `step` indexes the snapshot being shown; playing
/// from an earlier step drops everything after it before appending the new
/// snapshot.
///
/// Transitions never modify `self`: each returns the next `Game`, and the
/// owner decides whether to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
    x_is_next: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            history: vec![Board::new()],
            step: 0,
            x_is_next: true,
        }
    }

    /// Rebuild a game from its snapshots, with the cursor on the latest one.
    pub fn from_history(history: Vec<Board>) -> Result<Self, TicTacToeError> {
        if let Err(e) = Self::validate_history(&history) {
            tracing::debug!(len = history.len(), error = %e, "rejected history");
            return Err(e);
        }
        let step = history.len() - 1;
        Ok(Game {
            history,
            step,
            x_is_next: step % 2 == 0,
        })
    }

    fn validate_history(history: &[Board]) -> Result<(), TicTacToeError> {
        let Some(first) = history.first() else {
            return Err(TicTacToeError::InvalidHistory("history is empty".to_string()));
        };
        if !first.is_empty() {
            return Err(TicTacToeError::InvalidHistory(
                "first snapshot is not empty".to_string(),
            ));
        }

        for (k, pair) in history.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let step = k + 1;
            if let Some(winner) = rules::winner(prev) {
                return Err(TicTacToeError::InvalidHistory(format!(
                    "step {step} follows a win by {winner}"
                )));
            }
            let Some(sq) = next.changed_square(prev) else {
                return Err(TicTacToeError::InvalidHistory(format!(
                    "step {step} does not change exactly one square"
                )));
            };
            let expected = Mark::for_turn(k % 2 == 0);
            if prev.is_occupied(sq) || next.mark_at(sq) != Some(expected) {
                return Err(TicTacToeError::InvalidHistory(format!(
                    "step {step} must place {expected} on an empty square"
                )));
            }
        }

        Ok(())
    }

    // -- Accessors --

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of moves recorded, including those after the cursor.
    pub fn total_moves(&self) -> usize {
        self.history.len() - 1
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.x_is_next)
    }

    /// The snapshot at the cursor.
    pub fn board(&self) -> Board {
        self.history[self.step]
    }

    pub fn winner(&self) -> Option<Mark> {
        rules::winner(&self.board())
    }

    pub fn winning_line(&self) -> Option<[Square; 3]> {
        rules::winning_line(&self.board()).map(|(_, line)| line)
    }

    pub fn status(&self) -> Status {
        Status::of(&self.board(), self.x_is_next)
    }

    pub fn is_at_start(&self) -> bool {
        self.step == 0
    }

    pub fn is_at_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// The square filled by the move that produced the current snapshot.
    pub fn last_move(&self) -> Option<Square> {
        let prev = self.step.checked_sub(1)?;
        self.history[self.step].changed_square(&self.history[prev])
    }

    // -- Moves --

    /// Place the next mark on `square`, branching from the cursor.
    pub fn try_play(&self, square: Square) -> Result<Game, TicTacToeError> {
        let current = self.board();
        if !current.on_board(square) {
            return Err(TicTacToeError::NotOnBoard(square));
        }
        if let Some(winner) = rules::winner(&current) {
            return Err(TicTacToeError::GameOver(winner));
        }

        let mark = self.next_mark();
        let next = current.with_mark(square, mark)?;

        let mut history = self.history[..=self.step].to_vec();
        history.push(next);
        let step = history.len() - 1;
        tracing::trace!(square, %mark, step, "move committed");

        Ok(Game {
            history,
            step,
            x_is_next: !self.x_is_next,
        })
    }

    /// Like [`Game::try_play`], but a refused move leaves the game as it was.
    pub fn apply_move(&self, square: Square) -> Game {
        self.try_play(square).unwrap_or_else(|e| {
            tracing::debug!(square, reason = %e, "move ignored");
            self.clone()
        })
    }

    // -- Navigation --

    /// Move the cursor to `step`, clamped to the last recorded step.
    pub fn jump_to(&self, step: usize) -> Game {
        let last = self.history.len() - 1;
        if step > last {
            tracing::debug!(step, last, "jump clamped to latest step");
        }
        let step = step.min(last);
        tracing::trace!(step, "jump");

        Game {
            history: self.history.clone(),
            step,
            x_is_next: step % 2 == 0,
        }
    }

    pub fn try_jump_to(&self, step: usize) -> Result<Game, TicTacToeError> {
        if step >= self.history.len() {
            return Err(TicTacToeError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(self.jump_to(step))
    }

    /// One step back, or `None` at the start.
    pub fn back(&self) -> Option<Game> {
        let prev = self.step.checked_sub(1)?;
        Some(self.jump_to(prev))
    }

    /// One step forward, or `None` at the latest step.
    pub fn forward(&self) -> Option<Game> {
        if self.is_at_latest() {
            None
        } else {
            Some(self.jump_to(self.step + 1))
        }
    }

    pub fn to_start(&self) -> Game {
        self.jump_to(0)
    }

    pub fn to_latest(&self) -> Game {
        self.jump_to(self.history.len() - 1)
    }

    // -- Events --

    pub fn handle(&self, event: Event) -> Game {
        match event {
            Event::CellClicked { square } => self.apply_move(square),
            Event::StepSelected { step } => self.jump_to(step),
        }
    }

    pub fn view(&self) -> View {
        View::project(&self.history, self.step, self.x_is_next)
    }
}
