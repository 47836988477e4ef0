use super::board::Board;
use super::types::{Line, WinResult};

/// First line of the board's table, in table order, whose cells all hold the
/// same mark.
pub fn evaluate_winner(board: &Board) -> Option<WinResult> {
    check_lines(board, board.variant().lines())
}

pub fn check_lines(board: &Board, lines: &[Line]) -> Option<WinResult> {
    lines.iter().find_map(|line| {
        let (first, rest) = line.indices().split_first()?;
        let mark = board.get(*first)?.mark()?;
        rest.iter()
            .all(|&index| board.get(index).and_then(|cell| cell.mark()) == Some(mark))
            .then_some(WinResult { mark, line: *line })
    })
}
