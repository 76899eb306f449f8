mod types;
mod win_detector;

use std::fmt;

use crate::log;

pub use types::{Cell, GameStatus, Mark, Position, Winner};
pub use win_detector::{WinPattern, line_winner};

/// A `rows` x `columns` grid of cells stored row-major. Dimensions are fixed at
/// construction and cells only ever go from empty to marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<M = Mark> {
    rows: usize,
    columns: usize,
    grid: Vec<Vec<Cell<M>>>,
}

impl<M> Board<M> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> &Cell<M> {
        &self.grid[row][col]
    }

    pub(crate) fn grid(&self) -> &[Vec<Cell<M>>] {
        &self.grid
    }
}

impl<M: Copy + Eq> Board<M> {
    pub fn new(rows: usize, columns: usize) -> Result<Self, String> {
        if rows == 0 || columns == 0 {
            return Err(format!(
                "Board dimensions must be positive, got {}x{}",
                rows, columns
            ));
        }

        Ok(Self {
            rows,
            columns,
            grid: vec![vec![Cell::Empty; columns]; rows],
        })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell<M>> {
        self.grid.get(row)?.get(col).copied()
    }

    /// Places `marker` at (`row`, `col`). Returns `false` and leaves the board
    /// untouched when the position is off the board or already taken.
    pub fn apply_move(&mut self, row: usize, col: usize, marker: M) -> bool {
        match self.grid.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(marker);
                true
            }
            _ => false,
        }
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    /// Snapshot of the grid, one entry per row.
    pub fn render(&self) -> Vec<Vec<Cell<M>>> {
        self.grid.clone()
    }

    pub fn check_winner_with_pattern(&self) -> Option<Winner<M>> {
        WinPattern::ALL.into_iter().find_map(|pattern| {
            pattern
                .evaluate(self)
                .map(|marker| Winner { marker, pattern })
        })
    }

    fn has_empty_cell(&self) -> bool {
        self.grid.iter().any(|cells| cells.iter().any(Cell::is_empty))
    }

    pub fn status(&self) -> GameStatus<M> {
        if let Some(winner) = self.check_winner_with_pattern() {
            return GameStatus::Won(winner.marker);
        }
        if self.has_empty_cell() {
            GameStatus::InProgress
        } else {
            GameStatus::Draw
        }
    }
}

fn winner_message<M: fmt::Debug>(winner: &Winner<M>) -> String {
    format!("Winner: {:?} ({:?})", winner.marker, winner.pattern)
}

fn moves_left_message(moves_left: bool) -> &'static str {
    if moves_left {
        "There are moves left."
    } else {
        "No moves left."
    }
}

impl<M: Copy + Eq + fmt::Debug> Board<M> {
    pub fn check_winner(&self) -> Option<M> {
        let winner = self.check_winner_with_pattern()?;
        log!("{}", winner_message(&winner));
        Some(winner.marker)
    }

    pub fn any_moves_left(&self) -> bool {
        let moves_left = self.has_empty_cell();
        log!("{}", moves_left_message(moves_left));
        moves_left
    }

    pub fn is_game_over(&self) -> bool {
        let game_over = self.check_winner().is_some() || !self.any_moves_left();
        if game_over {
            log!("Game over.");
        }
        game_over
    }
}

#[cfg(test)]
impl Board<Mark> {
    /// Builds a board from rows like `"X.O"`; any character other than `X` or
    /// `O` is an empty cell.
    pub fn from_rows(rows: &[&str]) -> Self {
        let grid: Vec<Vec<Cell<Mark>>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Cell::Marked(Mark::X),
                        'O' => Cell::Marked(Mark::O),
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();

        Self {
            rows: grid.len(),
            columns: grid[0].len(),
            grid,
        }
    }
}
