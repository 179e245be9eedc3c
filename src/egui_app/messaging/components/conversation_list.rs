//! Conversation List Component
//!
//! The filtered conversation directory: contacts with at least one
//! exchanged message, newest thread first.

use eframe::egui;

use super::contact_item;
use crate::egui_app::messaging::state::MessagingState;
use crate::egui_app::theme::colors;

/// Render the conversation list
pub fn render(ui: &mut egui::Ui, state: &mut MessagingState) {
    let rows: Vec<(i64, usize)> = state
        .filtered_conversations()
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.contact.id, index))
        .collect();

    if rows.is_empty() {
        render_empty_state(ui, state);
        return;
    }

    let mut selected: Option<i64> = None;

    // Borrow the entries immutably for rendering, then apply the click.
    {
        let entries = state.filtered_conversations();
        for (contact_id, index) in &rows {
            let entry = entries[*index];
            let is_selected = state.selected_contact_id == Some(*contact_id);
            if contact_item::conversation(ui, entry, is_selected) {
                selected = Some(*contact_id);
            }
        }
    }

    if let Some(contact_id) = selected {
        state.select_conversation(contact_id);
    }
}

/// Empty state: no conversations at all, or none matching the filter
fn render_empty_state(ui: &mut egui::Ui, state: &MessagingState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        if state.is_loading_contacts || state.is_loading_messages {
            ui.spinner();
            return;
        }

        if state.filter_input.trim().is_empty() {
            ui.label("No conversations yet");
            ui.add_space(8.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Start one with the ✏ button above");
        } else {
            ui.label("No conversations found");
            ui.add_space(8.0);
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("No results for \"{}\"", state.filter_input.trim()),
            );
        }
    });
}
