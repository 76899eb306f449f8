pub mod board;
pub mod config;
pub mod logger;
mod settings;

pub use board::{Board, Cell, GameStatus, Mark, Position, WinPattern, Winner};
pub use settings::{BoardSettings, MAX_DIMENSION};
