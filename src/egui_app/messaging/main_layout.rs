//! Main Messaging Layout
//!
//! Sidebar on the left, chat area on the right, plus the modal dialogs
//! (thread-delete confirmation, attachment prompt).

use eframe::egui;

use super::chat_area::render_chat_area;
use super::sidebar::render_sidebar;
use super::state::MessagingState;
use crate::egui_app::config::Config;
use crate::egui_app::theme::styles;
use crate::shared::model::Session;

/// Sidebar width in pixels
const SIDEBAR_WIDTH: f32 = 320.0;

/// Render the main messaging view
pub fn render_messaging_view(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    // Collect finished backend calls before drawing anything.
    state.poll(config, session);
    state.search.tick(config, session, std::time::Instant::now());
    state.ensure_loaded(config, session);

    let available_size = ui.available_size();

    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(SIDEBAR_WIDTH, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::sidebar_frame().show(ui, |ui| {
                    render_sidebar(ui, state, config, session);
                });
            },
        );

        ui.add(egui::Separator::default().vertical());

        ui.allocate_ui_with_layout(
            egui::vec2(available_size.x - SIDEBAR_WIDTH - 1.0, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::chat_area_frame().show(ui, |ui| {
                    render_chat_area(ui, state, config, session);
                });
            },
        );
    });

    render_modals(ui, state, config, session);
}

/// Render modal dialogs
fn render_modals(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    if state.confirm_thread_delete {
        render_thread_delete_confirm(ui, state, config, session);
    }
    if state.show_attach_prompt {
        render_attach_prompt(ui, state);
    }
}

/// Confirmation dialog for the irreversible whole-thread delete
fn render_thread_delete_confirm(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    let contact_name = state
        .selected_contact()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "this contact".to_string());

    egui::Window::new("Delete conversation")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(300.0);
            ui.label(format!(
                "Delete every message between you and {}? This cannot be undone.",
                contact_name
            ));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.confirm_thread_delete = false;
                }
                if ui.button("Delete everything").clicked() {
                    state.delete_thread(config, session);
                }
            });
        });
}

/// Prompt for the path of the file to attach
fn render_attach_prompt(ui: &mut egui::Ui, state: &mut MessagingState) {
    egui::Window::new("Attach a file")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(320.0);
            ui.label("Path of the file to attach:");
            ui.add_space(8.0);
            ui.add(
                egui::TextEdit::singleline(&mut state.attach_path_input)
                    .hint_text("/home/me/document.pdf"),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.show_attach_prompt = false;
                    state.attach_path_input.clear();
                }
                let enabled = !state.attach_path_input.trim().is_empty();
                ui.add_enabled_ui(enabled, |ui| {
                    if ui.button("Attach").clicked() {
                        state.confirm_attachment();
                    }
                });
            });
        });
}
