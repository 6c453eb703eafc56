//! Message list component
//!
//! Mirrors the transcript into a scrolling view of chat bubbles. Message
//! text goes through `ui.label`, which renders it verbatim; transcript
//! content can never inject markup or widgets.

use crate::messages::{Message, Role};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Align, Color32, RichText, Vec2};

pub struct MessageList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let messages = self.state.transcript.snapshot();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.add_space(self.theme.spacing);

                    if messages.is_empty() {
                        self.show_welcome(ui);
                    } else {
                        for message in &messages {
                            self.show_message(ui, message);
                            ui.add_space(self.theme.spacing_sm);
                        }
                    }

                    ui.add_space(self.theme.spacing);
                });
            });
    }

    fn show_welcome(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.label(
                RichText::new("Welcome!")
                    .size(24.0)
                    .color(self.theme.text_primary),
            );

            ui.add_space(self.theme.spacing_lg);

            ui.label(
                RichText::new("Start chatting by typing a message or recording your voice.")
                    .size(14.0)
                    .color(self.theme.text_muted),
            );
        });
    }

    fn show_message(&self, ui: &mut egui::Ui, message: &Message) {
        let is_user = message.role == Role::User;

        let bubble_color = if is_user {
            self.theme.user_bubble
        } else {
            self.theme.assistant_bubble
        };

        let text_color = if is_user {
            Color32::WHITE
        } else {
            self.theme.text_primary
        };

        let align = if is_user { Align::RIGHT } else { Align::LEFT };

        ui.with_layout(egui::Layout::top_down(align), |ui| {
            ui.label(
                RichText::new(if is_user { "You" } else { "Assistant" })
                    .size(12.0)
                    .color(self.theme.text_muted),
            );

            ui.add_space(2.0);

            let max_width = ui.available_width() * 0.75;

            egui::Frame::none()
                .fill(bubble_color)
                .rounding(self.theme.bubble_rounding)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);

                    ui.label(RichText::new(&message.text).color(text_color));

                    if message.is_transcription {
                        ui.label(
                            RichText::new("(Voice message)")
                                .size(11.0)
                                .italics()
                                .color(text_color.gamma_multiply(0.7)),
                        );
                    }

                    if message.has_audio() {
                        self.show_audio_controls(ui, message, text_color);
                    }
                });

            let time_str = message.timestamp.format("%H:%M").to_string();
            ui.label(
                RichText::new(time_str)
                    .size(10.0)
                    .color(self.theme.text_muted),
            );
        });
    }

    fn show_audio_controls(&self, ui: &mut egui::Ui, message: &Message, text_color: Color32) {
        ui.horizontal(|ui| {
            let play_btn = ui.add(
                egui::Button::new(RichText::new("▶").size(14.0).color(text_color))
                    .min_size(Vec2::splat(28.0))
                    .rounding(self.theme.button_rounding),
            );

            if play_btn.on_hover_text("Replay audio").clicked() {
                self.state.replay_audio(message);
            }

            ui.label(
                RichText::new("Voice reply")
                    .size(12.0)
                    .color(text_color.gamma_multiply(0.8)),
            );
        });
    }
}
