//! Win and draw detection
//!
//! The win check is local: it looks only at the four lines through the cell
//! that was just played (row, column, and the two diagonals), so it is only
//! correct when invoked immediately after placing that mark. A full board
//! with a winning line is a win, not a draw, so `check_draw` must only be
//! consulted after `check_win` has said no.

use crate::board::{Board, Mark, Pos, BOARD_SIZE, WIN_LENGTH};

/// Check whether the mark just played at `pos` completed a run of
/// `connect_n` in a row.
///
/// Scans each of the four lines through `pos` end to end, counting
/// consecutive cells equal to `mark` and resetting the run on a mismatch.
/// Returns true as soon as any line accumulates `connect_n` matches.
pub fn check_win(board: &Board, connect_n: usize, pos: Pos, mark: Mark) -> bool {
    let size = BOARD_SIZE as i32;
    let row = pos.row as i32;
    let col = pos.col as i32;

    // Horizontal
    let mut count = 0;
    for c in 0..size {
        if board.get(Pos::new(row as u8, c as u8)) == mark {
            count += 1;
            if count == connect_n {
                return true;
            }
        } else {
            count = 0;
        }
    }

    // Vertical
    count = 0;
    for r in 0..size {
        if board.get(Pos::new(r as u8, col as u8)) == mark {
            count += 1;
            if count == connect_n {
                return true;
            }
        } else {
            count = 0;
        }
    }

    // Main diagonal through (row, col): counterpart column at row r.
    // The diagonal through an off-center cell does not span the whole
    // board, so the column must be range-checked per row.
    count = 0;
    for r in 0..size {
        let c = row + col - r;
        if c >= 0 && c < size && board.get(Pos::new(r as u8, c as u8)) == mark {
            count += 1;
            if count == connect_n {
                return true;
            }
        } else {
            count = 0;
        }
    }

    // Anti-diagonal through (row, col)
    count = 0;
    for r in 0..size {
        let c = col - row + r;
        if c >= 0 && c < size && board.get(Pos::new(r as u8, c as u8)) == mark {
            count += 1;
            if count == connect_n {
                return true;
            }
        } else {
            count = 0;
        }
    }

    false
}

/// Find the winning run through `pos` if one exists.
///
/// Returns the positions of the winning cells for highlighting. Fixed at
/// [`WIN_LENGTH`] since the game only plays connect-3.
pub fn find_winning_line(board: &Board, pos: Pos, mark: Mark) -> Option<[Pos; WIN_LENGTH]> {
    let size = BOARD_SIZE as i32;
    let row = pos.row as i32;
    let col = pos.col as i32;

    let lines: [fn(i32, i32, i32) -> (i32, i32); 4] = [
        |row, _col, i| (row, i),             // horizontal
        |_row, col, i| (i, col),             // vertical
        |row, col, i| (i, row + col - i),    // main diagonal
        |row, col, i| (i, col - row + i),    // anti-diagonal
    ];

    for line in lines {
        let mut run: Vec<Pos> = Vec::with_capacity(WIN_LENGTH);
        for i in 0..size {
            let (r, c) = line(row, col, i);
            if Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == mark {
                run.push(Pos::new(r as u8, c as u8));
                if run.len() == WIN_LENGTH {
                    return Some([run[0], run[1], run[2]]);
                }
            } else {
                run.clear();
            }
        }
    }

    None
}

/// Check for a draw: every cell holds a mark
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, cells: &[(i32, i32)], mark: Mark) {
        for &(r, c) in cells {
            assert!(board.drop_token(r, c, mark));
        }
    }

    #[test]
    fn horizontal_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], Mark::X);
        assert!(check_win(&board, 3, Pos::new(0, 2), Mark::X));
        assert!(!check_win(&board, 3, Pos::new(0, 2), Mark::O));
    }

    #[test]
    fn vertical_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 1), (1, 1), (2, 1)], Mark::O);
        assert!(check_win(&board, 3, Pos::new(1, 1), Mark::O));
    }

    #[test]
    fn diagonal_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 1), (2, 2)], Mark::X);
        assert!(check_win(&board, 3, Pos::new(2, 2), Mark::X));
    }

    #[test]
    fn anti_diagonal_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 2), (1, 1), (2, 0)], Mark::O);
        assert!(check_win(&board, 3, Pos::new(2, 0), Mark::O));
    }

    #[test]
    fn win_detected_from_any_anchor_on_the_line() {
        let mut board = Board::new();
        place(&mut board, &[(2, 0), (2, 1), (2, 2)], Mark::X);
        for c in 0..3 {
            assert!(check_win(&board, 3, Pos::new(2, c), Mark::X));
        }
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1)], Mark::X);
        assert!(!check_win(&board, 3, Pos::new(0, 1), Mark::X));
    }

    #[test]
    fn broken_run_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, &[(1, 0), (1, 2)], Mark::X);
        place(&mut board, &[(1, 1)], Mark::O);
        assert!(!check_win(&board, 3, Pos::new(1, 2), Mark::X));
    }

    #[test]
    fn off_center_cell_has_no_full_diagonal() {
        // The diagonals through a corner-adjacent edge cell leave the board
        // after two cells; the range check must not wrap or panic.
        let mut board = Board::new();
        place(&mut board, &[(0, 1), (1, 2)], Mark::X);
        assert!(!check_win(&board, 3, Pos::new(0, 1), Mark::X));
        assert!(!check_win(&board, 3, Pos::new(1, 2), Mark::X));
    }

    #[test]
    fn lower_connect_n_wins_earlier() {
        // The routine is parameterized even though the game always passes 3
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1)], Mark::X);
        assert!(check_win(&board, 2, Pos::new(0, 1), Mark::X));
        assert!(!check_win(&board, 3, Pos::new(0, 1), Mark::X));
    }

    #[test]
    fn winning_line_positions() {
        let mut board = Board::new();
        place(&mut board, &[(0, 2), (1, 1), (2, 0)], Mark::X);
        let line = find_winning_line(&board, Pos::new(1, 1), Mark::X).unwrap();
        assert_eq!(line, [Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]);
    }

    #[test]
    fn no_winning_line_when_no_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 1)], Mark::X);
        assert!(find_winning_line(&board, Pos::new(1, 1), Mark::X).is_none());
    }

    #[test]
    fn draw_requires_full_board() {
        let mut board = Board::new();
        assert!(!check_draw(&board));

        // X O X / O X O / O X O - full with no three in a row
        let x_cells = [(0, 0), (0, 2), (1, 1), (2, 1)];
        let o_cells = [(0, 1), (1, 0), (1, 2), (2, 0), (2, 2)];
        place(&mut board, &x_cells, Mark::X);
        assert!(!check_draw(&board));
        place(&mut board, &o_cells, Mark::O);
        assert!(check_draw(&board));
    }

    #[test]
    fn full_board_with_win_still_reports_draw() {
        // check_draw only looks at fullness; callers must check wins first
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)], Mark::X);
        place(&mut board, &[(1, 2), (2, 0), (2, 1), (2, 2)], Mark::O);
        assert!(check_win(&board, 3, Pos::new(0, 1), Mark::X));
        assert!(check_draw(&board));
    }
}
