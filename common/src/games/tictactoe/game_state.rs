use super::board::Board;
use super::types::{GameStatus, Mark, Variant};
use super::win_detector::evaluate_winner;
use crate::log;

/// One tic-tac-toe session. Transitions return a new value and leave `self`
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
    moves_made: u32,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(variant: Variant) -> Self {
        Self {
            board: Board::empty(variant),
            status: GameStatus::InProgress {
                next: Mark::STARTING,
            },
            moves_made: 0,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn variant(&self) -> Variant {
        self.board.variant()
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Whether `apply_move(index)` would change anything.
    pub fn accepts_move(&self, index: usize) -> bool {
        !self.status.is_terminal() && self.board.get(index).is_some_and(|cell| cell.is_empty())
    }

    /// Places the current mark at `index`. Occupied cells, out-of-range
    /// indices and finished games leave the state as it was.
    pub fn apply_move(&self, index: usize) -> Self {
        let GameStatus::InProgress { next: mark } = self.status else {
            return self.clone();
        };
        if !self.accepts_move(index) {
            return self.clone();
        }

        let mut board = self.board.clone();
        board.place(index, mark);

        let status = if let Some(result) = evaluate_winner(&board) {
            log!("{} wins on {} board via {:?}", result.mark, board.variant(), result.line.indices());
            GameStatus::Won(result)
        } else if board.is_full() {
            log!("Draw on {} board", board.variant());
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: mark.opponent(),
            }
        };

        Self {
            board,
            status,
            moves_made: self.moves_made + 1,
            last_move: Some(index),
        }
    }

    pub fn reset(&self) -> Self {
        Self::new(self.variant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn play(variant: Variant, moves: &[usize]) -> TicTacToeGameState {
        moves
            .iter()
            .fold(TicTacToeGameState::new(variant), |state, &index| state.apply_move(index))
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new(Variant::Classic3x3);
        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::X });
        assert_eq!(state.moves_made(), 0);
        assert!(state.board().cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_move_alternates_marks() {
        let state = play(Variant::Classic3x3, &[4]);
        assert_eq!(state.board().get(4), Some(Cell::Marked(Mark::X)));
        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::O });

        let state = state.apply_move(0);
        assert_eq!(state.board().get(0), Some(Cell::Marked(Mark::O)));
        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::X });
        assert_eq!(state.last_move(), Some(0));
        assert_eq!(state.moves_made(), 2);
    }

    #[test]
    fn test_apply_move_leaves_previous_state_untouched() {
        let before = TicTacToeGameState::new(Variant::Classic3x3);
        let after = before.apply_move(3);
        assert_ne!(before, after);
        assert_eq!(before, TicTacToeGameState::new(Variant::Classic3x3));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let state = play(Variant::Classic3x3, &[4]);
        assert!(!state.accepts_move(4));
        assert_eq!(state.apply_move(4), state);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let state = TicTacToeGameState::new(Variant::Classic3x3);
        assert_eq!(state.apply_move(9), state);
    }

    #[test]
    fn test_top_row_win_after_fifth_move() {
        let state = play(Variant::Classic3x3, &[0, 4, 1, 5]);
        assert!(!state.status().is_terminal());

        let state = state.apply_move(2);
        let GameStatus::Won(result) = state.status() else {
            panic!("expected a win, got {:?}", state.status());
        };
        assert_eq!(result.mark, Mark::X);
        assert_eq!(result.line.indices(), &[0, 1, 2]);
        assert_eq!(state.moves_made(), 5);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let state = play(Variant::Classic3x3, &[0, 4, 1, 5, 2]);
        assert_eq!(state.apply_move(8), state);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let state = play(Variant::Classic3x3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.apply_move(0), state);
    }

    #[test]
    fn test_win_on_last_cell_is_win_not_draw() {
        // X O X
        // O X O
        // O X X  <- the final move at 8 fills the board and completes the diagonal
        let state = play(Variant::Classic3x3, &[0, 1, 2, 3, 7, 5, 4, 6, 8]);
        assert!(state.board().is_full());
        assert!(matches!(state.status(), GameStatus::Won(result) if result.mark == Mark::X));
    }

    #[test]
    fn test_extended_block_win() {
        let state = play(Variant::Extended4x4, &[5, 0, 6, 3, 9, 12, 10]);
        let GameStatus::Won(result) = state.status() else {
            panic!("expected a win, got {:?}", state.status());
        };
        assert_eq!(result.mark, Mark::X);
        assert_eq!(result.line.indices(), &[5, 6, 9, 10]);
    }

    #[test]
    fn test_reset_after_win_restores_initial_state() {
        let state = play(Variant::Extended4x4, &[5, 0, 6, 3, 9, 12, 10]);
        let reset = state.reset();
        assert_eq!(reset, TicTacToeGameState::new(Variant::Extended4x4));
        assert_eq!(reset.status(), GameStatus::InProgress { next: Mark::X });
    }
}
