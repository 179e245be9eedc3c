//! Chat Header Component
//!
//! Contact name and role for the open thread, plus the whole-thread
//! delete action (which only arms the confirmation dialog).

use eframe::egui;

use crate::egui_app::messaging::state::MessagingState;
use crate::egui_app::theme::colors;

/// Render the chat header
pub fn render(ui: &mut egui::Ui, state: &mut MessagingState) {
    let Some(contact) = state.selected_contact().cloned() else {
        return;
    };

    egui::Frame::new()
        .fill(colors::CHAT_HEADER_BG)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                egui::Frame::new()
                    .fill(colors::ACCENT)
                    .corner_radius(egui::CornerRadius::same(18))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(contact.avatar_initial().to_string())
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                    });

                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&contact.name).strong().size(16.0));
                    ui.colored_label(colors::TEXT_SECONDARY, contact.role.label());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("🗑 Delete chat")
                        .on_hover_text("Delete the whole conversation")
                        .clicked()
                    {
                        state.confirm_thread_delete = true;
                    }
                });
            });
        });
}
