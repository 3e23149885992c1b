//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::TicTacToeApp;
pub use session::Session;
