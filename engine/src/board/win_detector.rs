use super::Board;
use super::types::Cell;

/// Win shapes, declared in evaluation order. When a board satisfies several
/// shapes with different markers, the earliest variant decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WinPattern {
    Horizontal,
    Vertical,
    RightDiagonal,
    LeftDiagonal,
    Corners,
    Block,
}

impl WinPattern {
    pub const ALL: [WinPattern; 6] = [
        WinPattern::Horizontal,
        WinPattern::Vertical,
        WinPattern::RightDiagonal,
        WinPattern::LeftDiagonal,
        WinPattern::Corners,
        WinPattern::Block,
    ];

    pub fn evaluate<M: Copy + Eq>(self, board: &Board<M>) -> Option<M> {
        match self {
            WinPattern::Horizontal => check_horizontal(board),
            WinPattern::Vertical => check_vertical(board),
            WinPattern::RightDiagonal => check_right_diagonal(board),
            WinPattern::LeftDiagonal => check_left_diagonal(board),
            WinPattern::Corners => check_corners(board),
            WinPattern::Block => check_blocks(board),
        }
    }
}

/// Returns the marker shared by every cell of `line`, or `None` if the line is
/// empty, contains an empty cell, or mixes markers.
pub fn line_winner<'a, M, I>(line: I) -> Option<M>
where
    M: Copy + Eq + 'a,
    I: IntoIterator<Item = &'a Cell<M>>,
{
    let mut cells = line.into_iter();
    let first = cells.next()?.marker()?;
    cells
        .all(|cell| cell.marker() == Some(first))
        .then_some(first)
}

fn check_horizontal<M: Copy + Eq>(board: &Board<M>) -> Option<M> {
    board.grid().iter().find_map(|row| line_winner(row))
}

fn check_vertical<M: Copy + Eq>(board: &Board<M>) -> Option<M> {
    (0..board.columns())
        .find_map(|col| line_winner((0..board.rows()).map(|row| board.at(row, col))))
}

fn diagonal_length<M: Copy + Eq>(board: &Board<M>) -> usize {
    board.rows().min(board.columns())
}

fn check_right_diagonal<M: Copy + Eq>(board: &Board<M>) -> Option<M> {
    line_winner((0..diagonal_length(board)).map(|k| board.at(k, k)))
}

fn check_left_diagonal<M: Copy + Eq>(board: &Board<M>) -> Option<M> {
    let last_col = board.columns() - 1;
    line_winner((0..diagonal_length(board)).map(|k| board.at(k, last_col - k)))
}

fn check_corners<M: Copy + Eq>(board: &Board<M>) -> Option<M> {
    let (rows, columns) = (board.rows(), board.columns());
    if rows < 2 || columns < 2 {
        return None;
    }

    line_winner([
        board.at(0, 0),
        board.at(0, columns - 1),
        board.at(rows - 1, 0),
        board.at(rows - 1, columns - 1),
    ])
}

fn check_blocks<M: Copy + Eq>(board: &Board<M>) -> Option<M> {
    let columns = board.columns();
    (0..board.rows() - 1)
        .flat_map(|x| (0..columns - 1).map(move |y| (x, y)))
        .find_map(|(x, y)| {
            line_winner([
                board.at(x, y),
                board.at(x, y + 1),
                board.at(x + 1, y),
                board.at(x + 1, y + 1),
            ])
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_line_winner_uniform_line() {
        let line = [Cell::Marked(Mark::X); 3];
        assert_eq!(line_winner(&line), Some(Mark::X));
    }

    #[test]
    fn test_line_winner_rejects_mixed_and_empty() {
        let mixed = [Cell::Marked(Mark::X), Cell::Marked(Mark::O), Cell::Marked(Mark::X)];
        let gap = [Cell::Marked(Mark::O), Cell::Empty, Cell::Marked(Mark::O)];
        let blank = [Cell::<Mark>::Empty; 4];
        let nothing: [Cell<Mark>; 0] = [];

        assert_eq!(line_winner(&mixed), None);
        assert_eq!(line_winner(&gap), None);
        assert_eq!(line_winner(&blank), None);
        assert_eq!(line_winner(&nothing), None);
    }

    #[test]
    fn test_line_winner_single_cell_is_degenerate_win() {
        assert_eq!(line_winner(&[Cell::Marked(Mark::O)]), Some(Mark::O));
    }

    #[test]
    fn test_line_winner_works_with_custom_markers() {
        let line = [Cell::Marked('#'), Cell::Marked('#')];
        assert_eq!(line_winner(&line), Some('#'));
    }

    #[test]
    fn test_all_lists_patterns_in_evaluation_order() {
        assert_eq!(
            WinPattern::ALL,
            [
                WinPattern::Horizontal,
                WinPattern::Vertical,
                WinPattern::RightDiagonal,
                WinPattern::LeftDiagonal,
                WinPattern::Corners,
                WinPattern::Block,
            ]
        );
    }

    #[test]
    fn test_diagonals_truncate_on_wide_board() {
        let board = Board::from_rows(&["X..O.", ".X.O.", "..XO."]);
        assert_eq!(WinPattern::RightDiagonal.evaluate(&board), Some(Mark::X));
        assert_eq!(WinPattern::LeftDiagonal.evaluate(&board), None);
    }

    #[test]
    fn test_left_diagonal_on_tall_board() {
        let board = Board::from_rows(&[".O", "O.", "..", ".."]);
        assert_eq!(WinPattern::LeftDiagonal.evaluate(&board), Some(Mark::O));
        assert_eq!(WinPattern::RightDiagonal.evaluate(&board), None);
    }

    #[test]
    fn test_corners_on_rectangular_board() {
        let board = Board::from_rows(&["X...X", ".....", "X...X"]);
        assert_eq!(WinPattern::Corners.evaluate(&board), Some(Mark::X));
    }

    #[test]
    fn test_corners_skipped_on_single_row() {
        let board = Board::from_rows(&["XXX"]);
        assert_eq!(WinPattern::Corners.evaluate(&board), None);
        assert_eq!(WinPattern::Block.evaluate(&board), None);
    }

    #[test]
    fn test_block_in_bottom_right() {
        let board = Board::from_rows(&["X...", ".O..", "..XX", "..XX"]);
        assert_eq!(WinPattern::Block.evaluate(&board), Some(Mark::X));
    }

    #[test]
    fn test_block_scan_is_row_major() {
        let board = Board::from_rows(&["..OO", "..OO", "XX..", "XX.."]);
        assert_eq!(WinPattern::Block.evaluate(&board), Some(Mark::O));
    }
}
