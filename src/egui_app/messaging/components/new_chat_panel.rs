//! New Conversation Panel
//!
//! Directory search for starting a conversation. A blank query shows
//! the contacts with no message history; a real query runs through the
//! debounced search engine, with an end-of-list sentinel that fetches
//! the next page when it scrolls into view.

use eframe::egui;

use super::contact_item;
use crate::egui_app::config::Config;
use crate::egui_app::messaging::search::SearchStatus;
use crate::egui_app::messaging::state::MessagingState;
use crate::egui_app::theme::colors;
use crate::shared::model::{Contact, Session};

/// Render the new-conversation panel
pub fn render(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label("🔍");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search.query)
                .hint_text("Search people...")
                .desired_width(ui.available_width() - 16.0),
        );
        if response.changed() {
            state.search.note_edited(std::time::Instant::now());
        }
    });
    ui.add_space(8.0);

    let mut start_with: Option<Contact> = None;

    match state.search.status() {
        SearchStatus::Idle => {
            if state.available_contacts().is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.colored_label(colors::TEXT_SECONDARY, "Everyone is already in a conversation");
                });
            } else {
                for contact in state.available_contacts() {
                    if contact_item::contact(ui, contact) {
                        start_with = Some(contact.clone());
                    }
                }
            }
        }
        SearchStatus::TooShort => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.colored_label(colors::TEXT_SECONDARY, "Keep typing to search...");
            });
        }
        SearchStatus::Searching => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.spinner();
            });
        }
        SearchStatus::NoResults => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label("No people found");
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!("No results for \"{}\"", state.search.query.trim()),
                );
            });
        }
        SearchStatus::Ready => {
            for contact in state.search.results().to_vec() {
                if contact_item::contact(ui, &contact) {
                    start_with = Some(contact);
                }
            }

            if state.search.is_fetching() {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else if state.search.may_have_more() {
                render_scroll_sentinel(ui, state, config, session);
            }
        }
    }

    if let Some(contact) = start_with {
        state.start_conversation(contact);
    }
}

/// End-of-list sentinel: once its rect enters the scroll viewport, the
/// next page is requested for the current term.
fn render_scroll_sentinel(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &Config,
    session: &Session,
) {
    let (rect, _response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 8.0),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        state.search.request_next_page(config, session);
    }
}
