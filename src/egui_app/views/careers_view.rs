//! Degree program management.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::model::Role;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.session.clone() else {
        return;
    };

    state.registrar.poll(&state.config, &session);
    if !state.registrar.careers.started() {
        let config = state.config.clone();
        state.registrar.load_careers(&config, &session);
    }

    let is_admin = session.role == Role::Admin;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);

            ui.heading(egui::RichText::new("Careers").color(colors::TEXT_LIGHT));
            ui.add_space(12.0);

            if let Some(notice) = state.registrar.notice.clone() {
                ui.colored_label(colors::ERROR, notice);
                if ui.small_button("Dismiss").clicked() {
                    state.registrar.notice = None;
                }
                ui.add_space(8.0);
            }

            if is_admin {
                styles::panel_card_frame().show(ui, |ui| {
                    ui.label(egui::RichText::new("New career").strong().color(colors::TEXT_DARK));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.career_form.name)
                                .hint_text("Name")
                                .desired_width(260.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.career_form.years)
                                .hint_text("Years")
                                .desired_width(60.0),
                        );
                        if ui.button("Create").clicked() {
                            let config = state.config.clone();
                            state.registrar.create_career(&config, &session);
                        }
                    });
                });
                ui.add_space(16.0);
            }

            styles::panel_card_frame().show(ui, |ui| {
                if state.registrar.careers.is_loading() && state.registrar.careers.items().is_empty() {
                    ui.spinner();
                    return;
                }
                if state.registrar.careers.items().is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No careers registered");
                    return;
                }

                let mut delete_id: Option<i64> = None;
                for career in state.registrar.careers.items() {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            colors::TEXT_DARK,
                            egui::RichText::new(&career.name).strong(),
                        );
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            format!("{} years", career.years),
                        );
                        if is_admin {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("🗑").clicked() {
                                        delete_id = Some(career.id);
                                    }
                                },
                            );
                        }
                    });
                    ui.separator();
                }

                if let Some(career_id) = delete_id {
                    let config = state.config.clone();
                    state.registrar.delete_career(&config, &session, career_id);
                }
            });
        });
    });
}
