//! Sidebar Component
//!
//! Filter bar, the conversation list, and the new-conversation panel.

use eframe::egui;

use super::components::{conversation_list, filter_bar, new_chat_panel};
use super::state::MessagingState;
use crate::egui_app::config::Config;
use crate::egui_app::theme::styles;
use crate::shared::model::Session;

/// Render the sidebar
pub fn render_sidebar(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    ui.set_min_width(320.0);

    styles::chat_list_frame().show(ui, |ui| {
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.heading("Messages");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if state.show_new_chat { "✕" } else { "✏" };
                if ui.button(label).clicked() {
                    state.show_new_chat = !state.show_new_chat;
                    if !state.show_new_chat {
                        state.search.reset();
                    }
                }
            });
        });

        ui.add_space(8.0);

        if !state.show_new_chat {
            filter_bar::render(ui, state);
            ui.add_space(8.0);
        }
    });

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if state.show_new_chat {
                new_chat_panel::render(ui, state, config, session);
            } else {
                conversation_list::render(ui, state);
            }
        });
}
