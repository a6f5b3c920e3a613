pub mod board;
pub mod error;
pub mod event;
pub mod game;
pub mod mark;
pub mod rules;
pub mod view;

/// Cell index on the board, row-major from the top-left corner.
pub type Square = usize;

/// Squares per row and per column.
pub const SIDE: usize = 3;
pub const NUM_SQUARES: usize = SIDE * SIDE;

pub use board::Board;
pub use error::TicTacToeError;
pub use event::Event;
pub use game::Game;
pub use mark::Mark;
pub use view::{MoveEntry, Status, View};
