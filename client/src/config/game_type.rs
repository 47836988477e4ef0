use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, clap::ValueEnum)]
pub enum GameType {
    #[serde(rename = "tictactoe3")]
    #[value(name = "tictactoe3")]
    TicTacToe3x3,
    #[serde(rename = "tictactoe4")]
    #[value(name = "tictactoe4")]
    TicTacToe4x4,
    #[serde(rename = "memory")]
    #[value(name = "memory")]
    Memory,
    #[serde(rename = "poker")]
    #[value(name = "poker")]
    Poker,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::TicTacToe3x3 => write!(f, "Tic-tac-toe 3x3"),
            GameType::TicTacToe4x4 => write!(f, "Tic-tac-toe 4x4"),
            GameType::Memory => write!(f, "Memory match"),
            GameType::Poker => write!(f, "Random poker cards"),
        }
    }
}
