//! Views: the top bar, the view router, and the per-view panels.

use eframe::egui;

use crate::egui_app::notifications::dropdown;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;

pub mod auth_view;
pub mod careers_view;
pub mod landing_view;
pub mod payments_view;
pub mod roster_view;
pub mod subjects_view;
pub mod users_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            let mut nav_target: Option<AppView> = None;

            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🎓 AulaNet").size(18.0).strong(),
                );

                let Some(session) = state.session.clone() else {
                    return;
                };

                ui.add_space(16.0);
                for view in AppView::available_for(session.role) {
                    let selected = state.current_view == *view;
                    let label = if selected {
                        egui::RichText::new(view.label()).strong().color(colors::TEXT_LIGHT)
                    } else {
                        egui::RichText::new(view.label()).color(colors::TEXT_SECONDARY)
                    };
                    if ui.button(label).clicked() {
                        nav_target = Some(*view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if ui.button("Logout").clicked() {
                        state.logout();
                        return;
                    }

                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        format!("{} · {}", session.display_name(), session.role.label()),
                    );

                    ui.add_space(8.0);
                    if let Some(target) =
                        dropdown::render_bell(ui, &mut state.notifications, &state.config, &session)
                    {
                        nav_target = Some(target);
                    }
                });
            });

            if let Some(target) = nav_target {
                state.navigate(target);
            }
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        if state.current_view == AppView::Auth {
            auth_view::render(ui, state);
            return;
        }

        // Every other view needs an identity; without one there is
        // nothing to recover short of logging in again.
        let Some(session) = state.session.clone() else {
            render_access_denied(ui);
            return;
        };

        match state.current_view {
            AppView::Auth => {}
            AppView::Landing => landing_view::render(ui, state),
            AppView::Messaging => {
                crate::egui_app::messaging::render_messaging_view(
                    ui,
                    &mut state.messaging,
                    &state.config,
                    &session,
                );
            }
            AppView::Subjects => subjects_view::render(ui, state),
            AppView::Careers => careers_view::render(ui, state),
            AppView::Payments => payments_view::render(ui, state),
            AppView::Users => users_view::render(ui, state),
            AppView::SubjectRoster => roster_view::render(ui, state),
        }
    });
}

fn render_access_denied(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.colored_label(colors::ERROR, egui::RichText::new("Access denied").size(24.0));
        ui.add_space(8.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Your session is gone. Please log in again.");
    });
}
