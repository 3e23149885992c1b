//! Game rules for tic-tac-toe
//!
//! Win and draw detection, anchored at the most recently played cell.

pub mod win;

// Re-exports for convenient access
pub use win::{check_draw, check_win, find_winning_line};
