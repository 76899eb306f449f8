use std::fmt;

use serde::{Deserialize, Serialize};

use super::win_detector::WinPattern;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell<M> {
    Empty,
    Marked(M),
}

impl<M: Copy> Cell<M> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn marker(&self) -> Option<M> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(*marker),
        }
    }
}

impl<M: fmt::Display> fmt::Display for Cell<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Marked(marker) => write!(f, "{}", marker),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner<M> {
    pub marker: M,
    pub pattern: WinPattern,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus<M> {
    InProgress,
    Won(M),
    Draw,
}

impl<M> GameStatus<M> {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
