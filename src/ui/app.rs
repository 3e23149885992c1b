//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::session::Session;
use super::theme::*;
use crate::game::GameState;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    session: Session,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            session: Session::default(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Match").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let state_text = match self.session.game().state() {
                        GameState::NotStarted => "Waiting for players",
                        GameState::Playing => "In play",
                        GameState::Won => "Game over",
                        GameState::Draw => "Game over",
                    };
                    ui.label(state_text);
                });
            });
        });
    }

    /// Render the side panel with the name form and game status
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                match self.session.game().state() {
                    GameState::NotStarted => self.render_name_form(ui),
                    GameState::Playing => self.render_turn_card(ui),
                    GameState::Won | GameState::Draw => self.render_game_over_card(ui),
                }

                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).color(X_COLOR));
            ui.label(RichText::new("O").size(20.0).color(O_COLOR));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("two players, one board")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the player-name form shown before the match starts
    fn render_name_form(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PLAYERS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.label(RichText::new("Player 1 (X)").size(11.0).color(TEXT_SECONDARY));
            ui.text_edit_singleline(&mut self.session.name_one);
            ui.add_space(6.0);

            ui.label(RichText::new("Player 2 (O)").size(11.0).color(TEXT_SECONDARY));
            ui.text_edit_singleline(&mut self.session.name_two);
            ui.add_space(10.0);

            if ui.button(RichText::new("Start Game").size(13.0)).clicked() {
                self.session.start_match();
            }

            ui.add_space(6.0);
            ui.label(
                RichText::new("Leave blank for default names")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.session.game().active_player();
            let (symbol, accent) = match player.mark() {
                crate::Mark::X => ("X", X_COLOR),
                _ => ("O", O_COLOR),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(32.0).strong().color(accent));
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(player.name())
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new("your turn").size(12.0).color(STATUS_OK));
                });
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let banner = match self.session.game().state() {
            GameState::Won => {
                let winner = self.session.game().winner().unwrap_or_default().to_string();
                format!("Winner is {winner}!")
            }
            _ => "It's a draw!".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(banner)
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(12.0);

                    if ui.button(RichText::new("Play Again").size(13.0)).clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("Reset").clicked() {
                self.session.reset();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Moves played: {}",
                    self.session.game().board().token_count()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("!").size(14.0).strong().color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let game = self.session.game();
            let clicked = self.board_view.show(
                ui,
                game.board(),
                game.active_player().mark(),
                game.last_move(),
                game.winning_line(),
                self.session.accepting_moves(),
            );

            if let Some(pos) = clicked {
                self.session.try_play(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // The name form owns the keyboard before the match starts
        if self.session.game().state() == GameState::NotStarted {
            return;
        }

        ctx.input(|i| {
            // N - New match
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
