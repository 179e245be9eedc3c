//! Contact Row Components
//!
//! Clickable rows for the sidebar lists: a conversation with its last
//! message preview, or a bare directory contact.

use eframe::egui;

use crate::egui_app::messaging::state::ConversationEntry;
use crate::egui_app::theme::{colors, styles};
use crate::shared::model::Contact;

/// Render a conversation row. Returns true when clicked.
pub fn conversation(ui: &mut egui::Ui, entry: &ConversationEntry, is_selected: bool) -> bool {
    let mut clicked = false;

    styles::contact_item_frame(is_selected, false).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let response = ui
            .horizontal(|ui| {
                avatar(ui, entry.contact.avatar_initial());
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            colors::CHAT_ITEM_TEXT,
                            egui::RichText::new(&entry.contact.name).strong(),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(colors::TEXT_SECONDARY, short_time(&entry.timestamp));
                        });
                    });
                    ui.colored_label(colors::TEXT_SECONDARY, &entry.preview);
                });
            })
            .response;

        clicked = response.interact(egui::Sense::click()).clicked();
    });

    clicked
}

/// Render a bare contact row (no history yet). Returns true when clicked.
pub fn contact(ui: &mut egui::Ui, contact: &Contact) -> bool {
    let mut clicked = false;

    styles::contact_item_frame(false, false).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let response = ui
            .horizontal(|ui| {
                avatar(ui, contact.avatar_initial());
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.colored_label(
                        colors::CHAT_ITEM_TEXT,
                        egui::RichText::new(&contact.name).strong(),
                    );
                    ui.colored_label(colors::TEXT_SECONDARY, contact.role.label());
                });
            })
            .response;

        clicked = response.interact(egui::Sense::click()).clicked();
    });

    clicked
}

fn avatar(ui: &mut egui::Ui, initial: char) {
    egui::Frame::new()
        .fill(colors::ACCENT)
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(initial.to_string())
                    .color(egui::Color32::WHITE)
                    .strong(),
            );
        });
}

/// Time portion (HH:MM) of an ISO-8601 timestamp
fn short_time(timestamp: &str) -> String {
    if let Some(t_pos) = timestamp.find('T') {
        let time_part = &timestamp[t_pos + 1..];
        if time_part.len() >= 5 {
            return time_part[..5].to_string();
        }
    }
    timestamp.to_string()
}
