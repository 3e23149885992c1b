//! Game controller: players, turn sequencing, and the match state machine
//!
//! The controller owns the board and the two player records and is the only
//! path through which the match state changes. It delegates win and draw
//! detection to [`rules`](crate::rules) after every successful move.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Mark, Pos, WIN_LENGTH};
use crate::rules;

/// Match state. Transitions only through [`Game`]:
/// NotStarted -> Playing -> {Won, Draw} -> NotStarted (on reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Playing,
    Won,
    Draw,
}

/// A named player bound to a fixed mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// The single error condition: a rejected move. The game recovers locally;
/// the same player simply tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move at ({row}, {col}): out of range or already taken")]
    InvalidMove { row: i32, col: i32 },
}

/// Game controller for one match
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    state: GameState,
    active: usize,
    winner: Option<String>,
    last_move: Option<Pos>,
    winning_line: Option<[Pos; WIN_LENGTH]>,
}

impl Game {
    pub const DEFAULT_NAMES: [&'static str; 2] = ["Player 1", "Player 2"];

    /// Create a fresh match. The first player plays X and moves first.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(player_one, Mark::X),
                Player::new(player_two, Mark::O),
            ],
            state: GameState::NotStarted,
            active: 0,
            winner: None,
            last_move: None,
            winning_line: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// External entry point for the view to start the match
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Winner's name, if the match has been won
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Cells of the winning run, for highlighting
    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        self.winning_line
    }

    /// Overwrite both player names. Board and match state are untouched.
    pub fn set_player_names(&mut self, player_one: impl Into<String>, player_two: impl Into<String>) {
        self.players[0].name = player_one.into();
        self.players[1].name = player_two.into();
    }

    /// Play the active player's mark at (row, col).
    ///
    /// An invalid move (out of range or occupied) changes nothing and the
    /// turn does not advance. On success the move is checked for a win,
    /// then a draw, and otherwise the turn passes to the other player.
    pub fn play_round(&mut self, row: i32, col: i32) -> Result<(), GameError> {
        let mark = self.active_player().mark();

        if !self.board.drop_token(row, col, mark) {
            debug!(row, col, player = %self.active_player().name(), "invalid move rejected");
            return Err(GameError::InvalidMove { row, col });
        }

        let pos = Pos::new(row as u8, col as u8);
        self.last_move = Some(pos);

        if rules::check_win(&self.board, WIN_LENGTH, pos, mark) {
            self.winner = Some(self.active_player().name().to_string());
            self.winning_line = rules::find_winning_line(&self.board, pos, mark);
            self.state = GameState::Won;
            info!(winner = %self.active_player().name(), "game won");
            return Ok(());
        }

        if rules::check_draw(&self.board) {
            self.state = GameState::Draw;
            info!("game drawn");
            return Ok(());
        }

        self.switch_player_turn();
        debug!(next = %self.active_player().name(), "\n{}", self.board);
        Ok(())
    }

    /// Toggle the active player between the two fixed records
    pub fn switch_player_turn(&mut self) {
        self.active = 1 - self.active;
    }

    /// Clear the board and return to NotStarted. Player names are kept;
    /// the first player is active again.
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = GameState::NotStarted;
        self.active = 0;
        self.winner = None;
        self.last_move = None;
        self.winning_line = None;
        debug!("game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMES[0], Self::DEFAULT_NAMES[1])
    }
}
