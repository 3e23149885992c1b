//! Two-player tic-tac-toe
//!
//! A desktop tic-tac-toe game for two named players: a 3x3 board, strict
//! turn alternation, and win/draw detection anchored at the most recent
//! move.
//!
//! # Architecture
//!
//! - [`board`]: board representation (cells, marks, positions)
//! - [`rules`]: win and draw detection
//! - [`game`]: the game controller state machine (turn sequencing, winner
//!   bookkeeping)
//! - [`ui`]: egui/eframe view layer (rendering, name form, click handling)
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Game, GameState, Mark, Pos};
//!
//! let mut game = Game::new("Alice", "Bob");
//! game.set_state(GameState::Playing);
//!
//! game.play_round(1, 1).unwrap();
//! assert_eq!(game.board().get(Pos::new(1, 1)), Mark::X);
//! assert_eq!(game.active_player().name(), "Bob");
//! ```
//!
//! The rules engine is deliberately local: after each move only the four
//! lines through the played cell are scanned, so checks are constant-time
//! and assume they run immediately after the placement.

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE, WIN_LENGTH};
pub use game::{Game, GameError, GameState, Player};
