//! Status line component
//!
//! Renders the single status slot: one line of text with a color keyed to
//! its kind, plus a spinner while a request is outstanding.

use crate::ui::state::{AppState, StatusKind};
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct StatusLine<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let status = &self.state.status;
        if status.is_empty() {
            // Reserve the row so the layout does not jump when a status appears
            ui.add_space(18.0);
            return;
        }

        let color = match status.kind {
            StatusKind::Info => self.theme.text_muted,
            StatusKind::Loading => self.theme.text_secondary,
            StatusKind::Error => self.theme.error,
        };

        ui.horizontal(|ui| {
            if status.kind == StatusKind::Loading {
                ui.add(egui::Spinner::new().size(14.0));
            }
            ui.label(RichText::new(&status.text).size(13.0).color(color));
        });

        if status.kind == StatusKind::Loading {
            ui.ctx().request_repaint();
        }
    }
}
