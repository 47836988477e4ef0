use clap::ValueEnum;

use crate::config::GameType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Select(usize),
    Flip(usize),
    Deal,
    Reset,
    CloseModal,
    Switch(GameType),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> UserCommand {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return UserCommand::Empty;
    };
    let argument = words.next();
    if words.next().is_some() {
        return UserCommand::Unknown(line.trim().to_string());
    }

    let command = match (first.to_ascii_lowercase().as_str(), argument) {
        ("q" | "quit" | "exit", None) => Some(UserCommand::Quit),
        ("h" | "help" | "?", None) => Some(UserCommand::Help),
        ("r" | "reset", None) => Some(UserCommand::Reset),
        ("d" | "deal", None) => Some(UserCommand::Deal),
        ("c" | "close", None) => Some(UserCommand::CloseModal),
        ("f" | "flip", Some(index)) => index.parse().ok().map(UserCommand::Flip),
        ("g" | "game", Some(name)) => GameType::from_str(name, true).ok().map(UserCommand::Switch),
        (index, None) => index.parse().ok().map(UserCommand::Select),
        _ => None,
    };

    command.unwrap_or_else(|| UserCommand::Unknown(line.trim().to_string()))
}

pub const HELP: &str = "\
Commands:
  <n>          play cell / flip card n
  flip <n>     turn a dealt card over (poker)
  deal         deal four new cards (poker)
  reset        start the current game over
  close        dismiss the end-of-game window
  game <name>  switch to tictactoe3, tictactoe4, memory or poker
  help         show this text
  quit         leave";
