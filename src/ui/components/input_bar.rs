//! Input bar component
//!
//! Provides the text input, the record toggle, and the send control. The
//! whole surface is disabled while a request is outstanding and re-enabled
//! when it settles.

use crate::ui::state::{AppState, RecordingState};
use crate::ui::theme::Theme;
use egui::{self, Key, RichText, Vec2};

pub struct InputBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    self.show_record_button(ui);
                    ui.add_space(self.theme.spacing_sm);
                    self.show_text_input(ui);
                    ui.add_space(self.theme.spacing_sm);
                    self.show_send_button(ui);
                });
            });
    }

    fn show_record_button(&mut self, ui: &mut egui::Ui) {
        let enabled = self.state.inputs_enabled();
        let is_recording = self.state.is_recording();

        let (label, tooltip, color) = match self.state.recording_state {
            RecordingState::Idle => ("🎤 Record", "Start recording", self.theme.text_secondary),
            RecordingState::Recording => ("⏹ Stop", "Stop recording", self.theme.recording),
            RecordingState::Processing => ("⏳", "Processing...", self.theme.text_muted),
        };

        let button = egui::Button::new(RichText::new(label).size(14.0).color(color))
            .min_size(Vec2::new(90.0, 36.0))
            .rounding(self.theme.button_rounding);

        let button = if is_recording {
            button.fill(self.theme.recording.gamma_multiply(0.2))
        } else {
            button
        };

        let response = ui.add_enabled(enabled, button);

        if response.clicked() {
            self.state.toggle_recording();
        }

        if enabled {
            response.on_hover_text(tooltip);
        }

        if is_recording {
            ui.ctx().request_repaint();
        }
    }

    fn show_text_input(&mut self, ui: &mut egui::Ui) {
        let enabled = self.state.inputs_enabled();
        // Reserve space for the send button
        let available_width = ui.available_width() - 60.0;

        let text_edit = egui::TextEdit::singleline(&mut self.state.input_text)
            .hint_text("Type a message...")
            .desired_width(available_width)
            .font(egui::TextStyle::Body)
            .margin(egui::Margin::symmetric(12.0, 8.0));

        let response = ui.add_enabled(enabled, text_edit);

        // TextEdit surrenders focus while handling Enter, so the submit
        // signal is "focus lost with Enter down", not a focused key press
        let enter_pressed = ui.input(|i| i.key_pressed(Key::Enter));
        let shift_held = ui.input(|i| i.modifiers.shift);

        if should_send(response.lost_focus(), enter_pressed, shift_held) {
            self.state.send_message();
            response.request_focus();
        }
    }

    fn show_send_button(&mut self, ui: &mut egui::Ui) {
        let can_send =
            self.state.inputs_enabled() && !self.state.input_text.trim().is_empty();

        let fill = if can_send {
            self.theme.primary
        } else {
            self.theme.text_muted
        };

        let button = egui::Button::new(RichText::new("➤").size(18.0).color(egui::Color32::WHITE))
            .min_size(Vec2::splat(36.0))
            .rounding(self.theme.button_rounding)
            .fill(fill);

        let response = ui.add_enabled(can_send, button);

        if response.clicked() {
            self.state.send_message();
        }

        response.on_hover_text("Send message (Enter)");
    }
}

/// Enter submits; Shift+Enter is reserved for newlines and plain
/// unfocusing (Tab, click-away) must not send.
fn should_send(lost_focus: bool, enter_pressed: bool, shift_held: bool) -> bool {
    lost_focus && enter_pressed && !shift_held
}
