//! Session state for the GUI
//!
//! The session is the sole owner of the [`Game`] instance; click and submit
//! handlers in the app go through it rather than touching the controller
//! directly. Submitting the name form starts a fresh match ("rename implies
//! fresh match"), while the reset button clears the current one in place and
//! restores the default names.

use tracing::debug;

use crate::board::Pos;
use crate::game::{Game, GameState};

/// Mutable UI-facing state: the game plus the name form and status message
pub struct Session {
    game: Game,
    /// Name form buffers
    pub name_one: String,
    pub name_two: String,
    /// Status line shown after a rejected move
    pub message: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            game: Game::default(),
            name_one: String::new(),
            name_two: String::new(),
            message: None,
        }
    }
}

impl Session {
    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether board clicks should be accepted
    pub fn accepting_moves(&self) -> bool {
        self.game.state() == GameState::Playing
    }

    /// Attempt the active player's move at `pos`.
    ///
    /// Ignored outside the Playing state; a rejected move sets the status
    /// message and leaves the same player to try again.
    pub fn try_play(&mut self, pos: Pos) {
        if !self.accepting_moves() {
            return;
        }

        match self.game.play_round(pos.row as i32, pos.col as i32) {
            Ok(()) => self.message = None,
            Err(err) => self.message = Some(format!("{err} - try again")),
        }
    }

    /// Start a fresh match from the name form. Blank fields fall back to
    /// the default names. Replaces the game wholesale rather than renaming
    /// in place, preserving the fresh-match semantics of submission.
    pub fn start_match(&mut self) {
        let name_one = non_blank(&self.name_one, Game::DEFAULT_NAMES[0]);
        let name_two = non_blank(&self.name_two, Game::DEFAULT_NAMES[1]);
        debug!(player_one = %name_one, player_two = %name_two, "starting match");

        self.game = Game::new(name_one, name_two);
        self.game.set_state(GameState::Playing);
        self.message = None;
    }

    /// Reset button: clear the board, restore default names, blank the form
    pub fn reset(&mut self) {
        self.game.reset();
        self.game
            .set_player_names(Game::DEFAULT_NAMES[0], Game::DEFAULT_NAMES[1]);
        self.name_one.clear();
        self.name_two.clear();
        self.message = None;
    }
}

fn non_blank(input: &str, fallback: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
