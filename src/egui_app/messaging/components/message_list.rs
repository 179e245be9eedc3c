//! Message List Component
//!
//! The messages of the open thread, oldest first, pinned to the newest
//! message whenever the thread or its contents change.

use eframe::egui;

use super::message_bubble;
use crate::egui_app::config::Config;
use crate::egui_app::messaging::state::MessagingState;
use crate::egui_app::theme::colors;
use crate::shared::model::{Message, Session};

/// Render the message list
pub fn render(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    let mut delete_request: Option<Message> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            let messages = state.thread_messages();
            if messages.is_empty() {
                render_empty_state(ui, state.is_loading_messages);
            } else {
                let mut last_date: Option<String> = None;

                for message in messages {
                    let message_date = extract_date(&message.timestamp);
                    if last_date.as_ref().map(|d| d != &message_date).unwrap_or(true) {
                        render_date_separator(ui, &message_date);
                        last_date = Some(message_date);
                    }

                    let is_own_message = message.sender_id == session.id;
                    if message_bubble::render(ui, message, is_own_message) {
                        delete_request = Some((*message).clone());
                    }
                }
            }

            ui.add_space(8.0);
        });

    if let Some(message) = delete_request {
        state.request_delete(config, session, &message);
    }
}

/// Render empty state when no messages
fn render_empty_state(ui: &mut egui::Ui, loading: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        if loading {
            ui.spinner();
        } else {
            ui.colored_label(colors::TEXT_SECONDARY, "No messages yet");
            ui.add_space(8.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Send a message to start the conversation");
        }
    });
}

/// Extract date portion from ISO 8601 timestamp string
fn extract_date(timestamp: &str) -> String {
    if let Some(t_pos) = timestamp.find('T') {
        timestamp[..t_pos].to_string()
    } else {
        timestamp.to_string()
    }
}

/// Render a date separator
fn render_date_separator(ui: &mut egui::Ui, date_str: &str) {
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        ui.add(egui::Separator::default().horizontal());
        ui.colored_label(colors::TEXT_SECONDARY, date_str);
        ui.add(egui::Separator::default().horizontal());
    });

    ui.add_space(16.0);
}
