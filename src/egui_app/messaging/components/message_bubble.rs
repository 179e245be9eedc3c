//! Message Bubble Component
//!
//! A single message with its content, optional attachment link and
//! timestamp. Own messages still inside the delete window carry a
//! delete button; the click is reported to the caller.

use chrono::Utc;
use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::model::Message;

/// Render a message bubble. Returns true when its delete button was
/// clicked.
pub fn render(ui: &mut egui::Ui, message: &Message, is_own_message: bool) -> bool {
    let mut delete_clicked = false;

    let (frame, align) = if is_own_message {
        (styles::outgoing_bubble_frame(), egui::Align::RIGHT)
    } else {
        (styles::incoming_bubble_frame(), egui::Align::LEFT)
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        let max_width = ui.available_width() * 0.7;

        ui.allocate_ui_with_layout(
            egui::vec2(max_width, 0.0),
            egui::Layout::top_down(align),
            |ui| {
                frame.show(ui, |ui| {
                    if !message.content.trim().is_empty() {
                        ui.label(egui::RichText::new(&message.content).color(colors::TEXT_DARK));
                    }

                    if let Some(name) = message.attachment_name() {
                        ui.colored_label(colors::ACCENT, format!("📎 {}", name));
                    }

                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_SECONDARY, short_time(&message.timestamp));

                        if is_own_message && message.within_delete_window(Utc::now()) {
                            if ui
                                .small_button("🗑")
                                .on_hover_text("Delete message")
                                .clicked()
                            {
                                delete_clicked = true;
                            }
                        }
                    });
                });
            },
        );
    });

    ui.add_space(4.0);
    delete_clicked
}

/// Format timestamp string to display time (HH:MM)
fn short_time(timestamp: &str) -> String {
    if let Some(t_pos) = timestamp.find('T') {
        let time_part = &timestamp[t_pos + 1..];
        if time_part.len() >= 5 {
            return time_part[..5].to_string();
        }
    }
    timestamp.to_string()
}
