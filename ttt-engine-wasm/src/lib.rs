use ttt_engine::{Board, Event, Game, Square};
use wasm_bindgen::prelude::*;

/// One tic-tac-toe game owned by the page.
///
/// The page creates it once (`new WasmGame()`), forwards clicks and move-list
/// selections, and re-renders from the accessors after each call.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Game::new() }
    }

    // -- Events --

    /// Returns true if the click placed a mark.
    pub fn cell_clicked(&mut self, square: u8) -> bool {
        self.replace(self.inner.apply_move(square as Square))
    }

    pub fn step_selected(&mut self, step: usize) {
        self.inner = self.inner.jump_to(step);
    }

    /// Apply a JSON-encoded event. Returns false if the JSON is malformed.
    pub fn dispatch(&mut self, event_json: &str) -> bool {
        match event_json.parse::<Event>() {
            Ok(event) => {
                self.inner = self.inner.handle(event);
                true
            }
            Err(_) => false,
        }
    }

    // -- Navigation --

    pub fn back(&mut self) -> bool {
        match self.inner.back() {
            Some(game) => self.replace(game),
            None => false,
        }
    }

    pub fn forward(&mut self) -> bool {
        match self.inner.forward() {
            Some(game) => self.replace(game),
            None => false,
        }
    }

    pub fn to_start(&mut self) {
        self.inner = self.inner.to_start();
    }

    pub fn to_latest(&mut self) {
        self.inner = self.inner.to_latest();
    }

    pub fn step(&self) -> usize {
        self.inner.step()
    }

    pub fn history_len(&self) -> usize {
        self.inner.history_len()
    }

    pub fn is_at_start(&self) -> bool {
        self.inner.is_at_start()
    }

    pub fn is_at_latest(&self) -> bool {
        self.inner.is_at_latest()
    }

    // -- Accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.board().cells())
    }

    pub fn status(&self) -> String {
        self.inner.status().to_string()
    }

    /// 1 for X, -1 for O, 0 when nobody has won.
    pub fn winner(&self) -> i8 {
        self.inner.winner().map_or(0, |m| m.to_int())
    }

    pub fn next_mark(&self) -> i8 {
        self.inner.next_mark().to_int()
    }

    pub fn last_move(&self) -> i8 {
        square_or_none(self.inner.last_move())
    }

    // -- JSON serialization (WASM boundary) --

    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.inner.view()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn moves_json(&self) -> String {
        serde_json::to_string(&self.inner.view().moves).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn winning_line_json(&self) -> String {
        serde_json::to_string(&self.inner.winning_line()).unwrap_or_else(|_| "null".to_string())
    }

    pub fn history_json(&self) -> String {
        serde_json::to_string(self.inner.history()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the whole history, moving the cursor to its latest step.
    /// Returns false, leaving the game untouched, if the history is invalid.
    pub fn replace_history(&mut self, json: &str) -> bool {
        let Ok(boards) = serde_json::from_str::<Vec<Board>>(json) else {
            return false;
        };
        match Game::from_history(boards) {
            Ok(game) => {
                self.inner = game;
                true
            }
            Err(_) => false,
        }
    }
}

impl WasmGame {
    /// Store `game`, reporting whether it differs from the current one.
    fn replace(&mut self, game: Game) -> bool {
        let changed = game != self.inner;
        self.inner = game;
        changed
    }
}

fn square_or_none(square: Option<Square>) -> i8 {
    square.map_or(-1, |sq| sq as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_reports_change() {
        let mut g = WasmGame::new();
        assert!(g.cell_clicked(4));
        assert!(!g.cell_clicked(4));
        assert_eq!(g.step(), 1);
        assert_eq!(g.next_mark(), -1);
        assert_eq!(g.last_move(), 4);
    }

    #[test]
    fn navigation() {
        let mut g = WasmGame::new();
        assert!(!g.back());
        g.cell_clicked(0);
        g.cell_clicked(1);
        assert!(g.back());
        assert_eq!(g.step(), 1);
        assert!(g.forward());
        assert!(!g.forward());
        g.to_start();
        assert!(g.is_at_start());
        assert_eq!(g.last_move(), -1);
        g.to_latest();
        assert!(g.is_at_latest());
    }

    #[test]
    fn dispatch_json_events() {
        let mut g = WasmGame::new();
        assert!(g.dispatch(r#"{"type":"cell_clicked","square":0}"#));
        assert!(g.dispatch(r#"{"type":"step_selected","step":0}"#));
        assert!(!g.dispatch("nope"));
        assert_eq!(g.step(), 0);
        assert_eq!(g.history_len(), 2);
    }

    #[test]
    fn status_and_winner() {
        let mut g = WasmGame::new();
        for sq in [0, 3, 1, 4, 2] {
            g.cell_clicked(sq);
        }
        assert_eq!(g.status(), "Winner: X");
        assert_eq!(g.winner(), 1);
        assert_eq!(g.winning_line_json(), "[0,1,2]");
        g.step_selected(2);
        assert_eq!(g.status(), "Next player: X");
        assert_eq!(g.winner(), 0);
        assert_eq!(g.winning_line_json(), "null");
    }

    #[test]
    fn view_json_shape() {
        let mut g = WasmGame::new();
        g.cell_clicked(4);
        let view: serde_json::Value = serde_json::from_str(&g.view_json()).unwrap();
        assert_eq!(view["status"], "Next player: O");
        assert_eq!(view["board"][4], 1);
        assert_eq!(view["moves"][1]["label"], "Go to move #1");

        let moves: serde_json::Value = serde_json::from_str(&g.moves_json()).unwrap();
        assert_eq!(moves.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn history_exchange() {
        let mut g = WasmGame::new();
        for sq in [4, 0, 8] {
            g.cell_clicked(sq);
        }
        let json = g.history_json();

        let mut other = WasmGame::new();
        assert!(other.replace_history(&json));
        assert_eq!(other.history_len(), 4);
        assert_eq!(other.step(), 3);
        assert_eq!(other.next_mark(), -1);

        assert!(!other.replace_history("[]"));
        assert!(!other.replace_history("[[1,0,0,0,0,0,0,0,0]]"));
        assert!(!other.replace_history("garbage"));
        assert_eq!(other.history_len(), 4);
    }
}
