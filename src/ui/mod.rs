//! GUI implementation with egui/eframe
//!
//! This module provides the desktop user interface for VoxChat using the
//! eframe framework.

mod app;
mod components;
mod state;
mod theme;

pub use app::VoxChatApp;
pub use state::{AppState, RecordingState, Status, StatusKind};
pub use theme::Theme;

use crate::api;
use crate::config::ServerConfig;

/// Run the VoxChat application
pub fn run(config: ServerConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("VoxChat"),
        ..Default::default()
    };

    let mut state = AppState::new();
    match api::spawn_worker(config) {
        Ok(handle) => state.connect(handle.command_tx, handle.event_rx),
        Err(e) => state.set_status(e.user_message(), StatusKind::Error),
    }

    eframe::run_native(
        "VoxChat",
        options,
        Box::new(move |cc| Ok(Box::new(VoxChatApp::new(cc, state)))),
    )
}
