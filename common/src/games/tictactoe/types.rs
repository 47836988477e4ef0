use std::fmt;

use super::lines::{CLASSIC_LINES, EXTENDED_LINES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const STARTING: Mark = Mark::X;

    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(*mark),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

/// The two hardcoded board layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Classic3x3,
    Extended4x4,
}

impl Variant {
    pub fn side(&self) -> usize {
        match self {
            Variant::Classic3x3 => 3,
            Variant::Extended4x4 => 4,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.side() * self.side()
    }

    pub fn lines(&self) -> &'static [Line] {
        match self {
            Variant::Classic3x3 => CLASSIC_LINES,
            Variant::Extended4x4 => EXTENDED_LINES,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classic3x3 => write!(f, "3x3"),
            Variant::Extended4x4 => write!(f, "4x4"),
        }
    }
}

/// Board indices that win when they all hold the same mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line(&'static [usize]);

impl Line {
    pub const fn new(indices: &'static [usize]) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &'static [usize] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinResult {
    pub mark: Mark,
    pub line: Line,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Mark },
    Won(WinResult),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won(result) => Some(result.line),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next: {}", next),
            GameStatus::Won(result) => write!(f, "{} wins!", result.mark),
            GameStatus::Draw => write!(f, "Draw!"),
        }
    }
}
