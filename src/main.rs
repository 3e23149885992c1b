//! Tic-tac-toe GUI
//!
//! A graphical two-player tic-tac-toe game.

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 620.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
