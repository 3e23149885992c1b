//! Board structure with move validation

use std::fmt;

use super::{Cell, Mark, Pos, BOARD_SIZE};

/// Fixed 3x3 grid of cells
///
/// Invariant: every cell is empty or holds exactly one player's mark. Cells
/// are mutated only through [`drop_token`](Board::drop_token) and
/// [`reset`](Board::reset); whose-turn-is-it validation is the game
/// controller's job, not the board's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::new(); BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the mark at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize].value()
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.row as usize][pos.col as usize].is_empty()
    }

    /// Read-only view of the grid for rendering and inspection
    #[inline]
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Attempt to place a mark at (row, col).
    ///
    /// Returns false without mutating anything when the coordinates are out
    /// of range or the target cell is already taken.
    pub fn drop_token(&mut self, row: i32, col: i32, mark: Mark) -> bool {
        if !Pos::is_valid(row, col) {
            return false;
        }

        let pos = Pos::new(row as u8, col as u8);
        if !self.is_empty(pos) {
            return false;
        }

        self.cells[pos.row as usize][pos.col as usize].add_token(mark);
        true
    }

    /// Total marks on the board
    #[inline]
    pub fn token_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Check if every cell holds a mark
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Check if the board has no marks at all
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_empty())
    }

    /// Clear every cell back to empty
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.clear();
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| format!(" {} ", cell.value().symbol()))
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_board_empty());
        assert!(!board.is_full());
        assert_eq!(board.token_count(), 0);
    }

    #[test]
    fn drop_token_places_mark() {
        let mut board = Board::new();
        assert!(board.drop_token(1, 1, Mark::X));
        assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
        assert_eq!(board.token_count(), 1);
    }

    #[test]
    fn drop_token_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!board.drop_token(-1, 0, Mark::X));
        assert!(!board.drop_token(0, 3, Mark::X));
        assert!(!board.drop_token(3, 3, Mark::O));
        assert!(board.is_board_empty());
    }

    #[test]
    fn drop_token_rejects_occupied_cell() {
        let mut board = Board::new();
        assert!(board.drop_token(0, 0, Mark::X));
        assert!(!board.drop_token(0, 0, Mark::O));
        assert_eq!(board.get(Pos::new(0, 0)), Mark::X);
        assert_eq!(board.token_count(), 1);
    }

    #[test]
    fn reset_clears_all_cells() {
        let mut board = Board::new();
        board.drop_token(0, 0, Mark::X);
        board.drop_token(2, 2, Mark::O);
        board.reset();
        assert!(board.is_board_empty());
    }

    #[test]
    fn full_board_reports_full() {
        let mut board = Board::new();
        for idx in 0..9 {
            let pos = Pos::from_index(idx);
            let mark = if idx % 2 == 0 { Mark::X } else { Mark::O };
            assert!(board.drop_token(pos.row as i32, pos.col as i32, mark));
        }
        assert!(board.is_full());
    }

    #[test]
    fn display_renders_grid() {
        let mut board = Board::new();
        board.drop_token(0, 0, Mark::X);
        board.drop_token(1, 1, Mark::O);
        let rendered = board.to_string();
        assert!(rendered.contains('X'));
        assert!(rendered.contains('O'));
        assert!(rendered.contains("---+---+---"));
    }

    proptest! {
        #[test]
        fn out_of_range_never_mutates(row in -100i32..100, col in -100i32..100) {
            prop_assume!(!Pos::is_valid(row, col));
            let mut board = Board::new();
            board.drop_token(1, 1, Mark::X);
            let before = board.clone();
            prop_assert!(!board.drop_token(row, col, Mark::O));
            prop_assert_eq!(board, before);
        }

        #[test]
        fn in_range_on_empty_board_succeeds(row in 0i32..3, col in 0i32..3) {
            let mut board = Board::new();
            prop_assert!(board.drop_token(row, col, Mark::X));
            prop_assert_eq!(board.get(Pos::new(row as u8, col as u8)), Mark::X);
        }
    }
}
