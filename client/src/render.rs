use common::games::memory::{GRID_WIDTH, MemoryGameState, MemoryStatus, PAIR_COUNT};
use common::games::poker::PokerTable;
use common::games::tictactoe::{Cell, GameStatus, TicTacToeGameState};

use crate::state::ActiveGame;

const RED: &str = "\x1b[31m";
const RESET_COLOR: &str = "\x1b[0m";

pub fn render_game(game: &ActiveGame) -> String {
    let mut out = String::new();
    match game {
        ActiveGame::TicTacToe { state, modal_visible } => {
            out.push_str(&render_tictactoe(state));
            if *modal_visible {
                out.push_str(&render_modal(&tictactoe_result_text(state)));
            }
        }
        ActiveGame::Memory { state, modal_visible } => {
            out.push_str(&render_memory(state));
            if *modal_visible {
                out.push_str(&render_modal(&format!(
                    "All pairs found in {} moves!",
                    state.moves_made()
                )));
            }
        }
        ActiveGame::Poker(table) => out.push_str(&render_poker(table)),
    }
    out
}

pub fn render_tictactoe(state: &TicTacToeGameState) -> String {
    let board = state.board();
    let side = board.variant().side();
    let winning_line = state.status().winning_line();
    let last_move = state.last_move();

    let mut out = format!("{}    Moves: {}\n\n", state.status(), state.moves_made());
    for (row_index, row) in board.cells().chunks(side).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let index = row_index * side + col;
                let label = match cell {
                    Cell::Empty => index.to_string(),
                    Cell::Marked(mark) if winning_line.is_some_and(|line| line.contains(index)) => {
                        format!("[{}]", mark)
                    }
                    Cell::Marked(mark) if last_move == Some(index) => format!("{}*", mark),
                    Cell::Marked(mark) => mark.to_string(),
                };
                format!("{:^5}", label)
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

fn tictactoe_result_text(state: &TicTacToeGameState) -> String {
    match state.status() {
        GameStatus::Won(result) => format!("{} wins!", result.mark),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress { .. } => String::new(),
    }
}

pub fn render_memory(state: &MemoryGameState) -> String {
    let status = match state.status() {
        MemoryStatus::Won => "Solved!".to_string(),
        MemoryStatus::InProgress => format!("Pairs: {}/{}", state.matched_pairs(), PAIR_COUNT),
    };
    let mut out = format!("{}    Moves: {}\n\n", status, state.moves_made());

    for (row_index, row) in state.cards().chunks(GRID_WIDTH).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, card)| {
                if card.face_up || card.matched {
                    format!(" {:^3} ", card.symbol)
                } else {
                    format!("[{:>3}]", row_index * GRID_WIDTH + col)
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

pub fn render_poker(table: &PokerTable) -> String {
    if table.is_empty() {
        return format!("Type deal to deal cards.\n\n> {}\n", table.deal_label());
    }

    let cards: Vec<String> = table
        .hand()
        .iter()
        .map(|face_card| {
            if !face_card.face_up {
                return "[##]".to_string();
            }
            let text = format!("[{}]", face_card.card);
            if face_card.card.is_red() {
                format!("{}{}{}", RED, text, RESET_COLOR)
            } else {
                text
            }
        })
        .collect();
    format!("{}\n\n> {}\n", cards.join("  "), table.deal_label())
}

pub fn render_modal(message: &str) -> String {
    let width = message.chars().count().max(24) + 4;
    let border = format!("+{}+", "-".repeat(width));
    let line = |text: &str| format!("|{:^width$}|", text, width = width);
    format!(
        "\n{}\n{}\n{}\n{}\n",
        border,
        line(message),
        line("reset: play again  close: hide"),
        border
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::Variant;

    #[test]
    fn test_empty_board_shows_indices() {
        let text = render_tictactoe(&TicTacToeGameState::new(Variant::Classic3x3));
        assert!(text.starts_with("Next: X"));
        for index in 0..9 {
            assert!(text.contains(&index.to_string()));
        }
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let state = [0, 4, 1, 5, 2]
            .iter()
            .fold(TicTacToeGameState::new(Variant::Classic3x3), |s, &i| s.apply_move(i));
        let text = render_tictactoe(&state);

        assert!(text.starts_with("X wins!"));
        assert_eq!(text.matches("[X]").count(), 3);
        assert!(!text.contains("[O]"));
    }

    #[test]
    fn test_last_move_is_starred() {
        let state = TicTacToeGameState::new(Variant::Classic3x3).apply_move(4);
        assert!(render_tictactoe(&state).contains("X*"));

        let text = render_tictactoe(&state.apply_move(0));
        assert!(text.contains("O*"));
        assert!(!text.contains("X*"));
    }

    #[test]
    fn test_modal_only_when_visible() {
        let state = [0, 4, 1, 5, 2]
            .iter()
            .fold(TicTacToeGameState::new(Variant::Classic3x3), |s, &i| s.apply_move(i));

        let hidden = ActiveGame::TicTacToe {
            state: state.clone(),
            modal_visible: false,
        };
        assert!(!render_game(&hidden).contains("play again"));

        let shown = ActiveGame::TicTacToe {
            state,
            modal_visible: true,
        };
        assert!(render_game(&shown).contains("play again"));
    }

    #[test]
    fn test_memory_hides_face_down_symbols() {
        let state = MemoryGameState::new(&mut SessionRng::new(1));
        let text = render_memory(&state);
        assert!(text.contains("[  0]"));
        assert!(!text.contains(state.cards()[0].symbol));

        let flipped = state.flip(0);
        assert!(render_memory(&flipped).contains(flipped.cards()[0].symbol));
    }

    #[test]
    fn test_poker_prompt_and_deal_label() {
        let table = PokerTable::new();
        assert!(render_poker(&table).contains("> Deal\n"));

        let dealt = table.deal(&mut SessionRng::new(9));
        let text = render_poker(&dealt);
        assert!(text.contains("> Deal again"));
        for face_card in dealt.hand() {
            assert!(text.contains(&face_card.card.to_string()));
        }
        assert!(render_poker(&dealt.flip(0)).contains("[##]"));
    }
}
