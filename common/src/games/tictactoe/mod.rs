mod board;
mod game_state;
mod lines;
mod types;
mod win_detector;

pub use board::Board;
pub use game_state::TicTacToeGameState;
pub use lines::{CLASSIC_LINES, EXTENDED_LINES};
pub use types::{Cell, GameStatus, Line, Mark, Variant, WinResult};
pub use win_detector::{check_lines, evaluate_winner};

pub fn apply_move(state: &TicTacToeGameState, index: usize) -> TicTacToeGameState {
    state.apply_move(index)
}

pub fn reset(variant: Variant) -> TicTacToeGameState {
    TicTacToeGameState::new(variant)
}
