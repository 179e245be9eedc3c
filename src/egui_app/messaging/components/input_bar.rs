//! Input Bar Component
//!
//! The compose field at the bottom of the chat area: attachment button
//! and chip, text field, send button. Send is a no-op while both the
//! trimmed text and the attachment are absent.

use eframe::egui;

use crate::egui_app::config::Config;
use crate::egui_app::messaging::state::MessagingState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::model::Session;

/// Render the input bar
pub fn render(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    styles::input_bar_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        if let Some(attachment) = &state.attachment {
            let chip = format!("📎 {} ({})", attachment.file_name, attachment.human_size());
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_DARK, chip);
                if ui.small_button("✕").on_hover_text("Remove attachment").clicked() {
                    state.clear_attachment();
                }
            });
            ui.add_space(4.0);
        }

        ui.horizontal(|ui| {
            if ui.button("📎").on_hover_text("Attach a file").clicked() {
                state.show_attach_prompt = true;
            }

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.compose_input)
                    .hint_text("Type a message...")
                    .desired_width(ui.available_width() - 80.0),
            );

            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if response.lost_focus() && enter_pressed {
                state.send(config, session);
            }

            let send_enabled = state.can_send() && !state.is_sending;
            ui.add_enabled_ui(send_enabled, |ui| {
                if ui.button("➤").clicked() {
                    state.send(config, session);
                }
            });

            if state.is_sending {
                ui.spinner();
            }
        });
    });
}
