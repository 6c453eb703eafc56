//! Main application struct and eframe integration

use crate::api::ApiCommand;
use crate::ui::components::{InputBar, MessageList, StatusLine};
use crate::ui::state::{AppState, RecordingState, StatusKind};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};

/// Main VoxChat application
pub struct VoxChatApp {
    /// Application state and controller
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Whether the first-frame setup has run
    initialized: bool,
}

impl VoxChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        Self {
            state,
            theme,
            initialized: false,
        }
    }

    /// First-frame setup: greet and seed the transcript from the server
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        self.state
            .set_transient_status("Ready to chat!", StatusKind::Info);
        self.state.request_history();
        self.initialized = true;
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("VoxChat")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.label(
                        RichText::new("AI Voice Chat")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button("🗑 Clear")
                            .on_hover_text("Clear chat history")
                            .clicked()
                        {
                            self.state.clear_chat();
                        }
                    });
                });
            });
    }

    fn show_input_area(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("input_area")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    StatusLine::new(&self.state, &self.theme).show(ui);
                    ui.add_space(self.theme.spacing_sm);
                    InputBar::new(&mut self.state, &self.theme).show(ui);
                });
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                MessageList::new(&self.state, &self.theme).show(ui);
            });
    }
}

impl eframe::App for VoxChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize();

        // Drain recording chunks and worker events
        self.state.poll();

        self.show_header(ctx);
        self.show_input_area(ctx);
        self.show_content(ctx);

        // Keep polling while work is in flight
        if self.state.loading || self.state.recording_state != RecordingState::Idle {
            ctx.request_repaint();
        }

        // Wake up in time to expire a transient status even when idle
        if let Some(remaining) = self.state.time_until_clear() {
            ctx.request_repaint_after(remaining);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(tx) = &self.state.command_tx {
            let _ = tx.send(ApiCommand::Shutdown);
        }
    }
}
