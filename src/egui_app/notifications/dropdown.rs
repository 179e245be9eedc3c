//! Notification Bell Dropdown
//!
//! The bell button with its unread badge, and the dropdown listing the
//! recent notifications. Clicking a row navigates to the view covering
//! that category; the returned target is applied by the caller.

use eframe::egui;

use crate::egui_app::config::Config;
use crate::egui_app::notifications::NotificationFeed;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;
use crate::shared::model::Session;

/// Render the bell button in the top bar. Returns the view to navigate
/// to when a notification was clicked.
pub fn render_bell(
    ui: &mut egui::Ui,
    feed: &mut NotificationFeed,
    config: &Config,
    session: &Session,
) -> Option<AppView> {
    let badge = if feed.unread_count() > 0 {
        format!("🔔 {}", feed.unread_count())
    } else {
        "🔔".to_string()
    };

    if ui.button(badge).clicked() {
        feed.toggle_open();
    }

    if feed.open {
        render_dropdown(ui, feed, config, session)
    } else {
        None
    }
}

fn render_dropdown(
    ui: &mut egui::Ui,
    feed: &mut NotificationFeed,
    config: &Config,
    session: &Session,
) -> Option<AppView> {
    let mut clicked: Option<usize> = None;
    let mut open = true;

    egui::Window::new("Notifications")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 40.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(280.0);

            if feed.is_loading() && feed.recent().is_empty() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
                return;
            }

            if feed.recent().is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "You're all caught up");
                return;
            }

            for (index, item) in feed.recent().iter().enumerate() {
                let label = format!("{} {}", item.category.icon(), item.text);
                if ui.button(label).clicked() {
                    clicked = Some(index);
                }
            }

            if feed.unread_count() > feed.recent().len() {
                ui.add_space(4.0);
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!("+{} more unread", feed.unread_count() - feed.recent().len()),
                );
            }
        });

    if !open {
        feed.open = false;
    }

    clicked.and_then(|index| feed.select(index, config, session))
}
