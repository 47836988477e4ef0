use common::games::SessionRng;
use common::games::memory::{MemoryGameState, MemoryStatus};
use common::games::poker::PokerTable;
use common::games::tictactoe::{TicTacToeGameState, Variant};

use crate::config::GameType;

/// Work deferred to a timer so the player can see the board first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTimer {
    ShowModal,
    HideMismatch,
}

#[derive(Debug, Clone)]
pub enum ActiveGame {
    TicTacToe {
        state: TicTacToeGameState,
        modal_visible: bool,
    },
    Memory {
        state: MemoryGameState,
        modal_visible: bool,
    },
    Poker(PokerTable),
}

impl ActiveGame {
    pub fn new(game_type: GameType, rng: &mut SessionRng) -> Self {
        match game_type {
            GameType::TicTacToe3x3 => Self::tictactoe(Variant::Classic3x3),
            GameType::TicTacToe4x4 => Self::tictactoe(Variant::Extended4x4),
            GameType::Memory => ActiveGame::Memory {
                state: MemoryGameState::new(rng),
                modal_visible: false,
            },
            GameType::Poker => ActiveGame::Poker(PokerTable::new()),
        }
    }

    fn tictactoe(variant: Variant) -> Self {
        ActiveGame::TicTacToe {
            state: TicTacToeGameState::new(variant),
            modal_visible: false,
        }
    }

    pub fn game_type(&self) -> GameType {
        match self {
            ActiveGame::TicTacToe { state, .. } => match state.variant() {
                Variant::Classic3x3 => GameType::TicTacToe3x3,
                Variant::Extended4x4 => GameType::TicTacToe4x4,
            },
            ActiveGame::Memory { .. } => GameType::Memory,
            ActiveGame::Poker(_) => GameType::Poker,
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            ActiveGame::TicTacToe { state, .. } => state.status().is_terminal(),
            ActiveGame::Memory { state, .. } => state.status() == MemoryStatus::Won,
            ActiveGame::Poker(_) => false,
        }
    }

    pub fn modal_visible(&self) -> bool {
        match self {
            ActiveGame::TicTacToe { modal_visible, .. } | ActiveGame::Memory { modal_visible, .. } => {
                *modal_visible
            }
            ActiveGame::Poker(_) => false,
        }
    }

    pub fn set_modal_visible(&mut self, visible: bool) {
        match self {
            ActiveGame::TicTacToe { modal_visible, .. } | ActiveGame::Memory { modal_visible, .. } => {
                *modal_visible = visible;
            }
            ActiveGame::Poker(_) => {}
        }
    }
}
