//! Chat Area Component
//!
//! Header, message list and input bar for the open thread, plus the
//! informational banner for validation warnings and send failures.

use eframe::egui;

use super::components::{chat_header, input_bar, message_list};
use super::state::MessagingState;
use crate::egui_app::config::Config;
use crate::egui_app::theme::colors;
use crate::shared::model::Session;

/// Render the chat area
pub fn render_chat_area(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    if let Some(banner) = state.banner.clone() {
        ui.add_space(6.0);
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(255, 238, 238))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(200, 80, 80)))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(160, 20, 20), banner);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            state.banner = None;
                        }
                    });
                });
            });
        ui.add_space(6.0);
    }

    if state.selected_contact_id.is_some() {
        render_active_chat(ui, state, config, session);
    } else {
        render_empty_state(ui);
    }
}

/// Render an active chat conversation
fn render_active_chat(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    ui.vertical(|ui| {
        chat_header::render(ui, state);

        ui.add(egui::Separator::default().horizontal());

        // Reserve space for the input bar at the bottom.
        let available_height = ui.available_height() - 60.0;
        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), available_height),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                message_list::render(ui, state, config, session);
            },
        );

        input_bar::render(ui, state, config, session);
    });
}

/// Render the empty state when no conversation is selected
fn render_empty_state(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);

            egui::Frame::new()
                .fill(colors::BUBBLE_INCOMING)
                .stroke(egui::Stroke::new(1.0, colors::BUBBLE_BORDER))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Select a conversation to start typing")
                            .color(colors::TEXT_DARK),
                    );
                });
        });
    });
}
