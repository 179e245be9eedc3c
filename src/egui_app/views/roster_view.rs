//! Subject roster with per-student grade entry (instructor).

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.session.clone() else {
        return;
    };

    state.registrar.poll(&state.config, &session);

    let Some(subject_id) = state.registrar.roster_subject_id else {
        // Reached via the bell or the nav bar without a subject picked
        // yet; send the instructor through the catalogue.
        render_pick_subject(ui, state);
        return;
    };

    let subject_name = state
        .registrar
        .subjects
        .items()
        .iter()
        .find(|s| s.id == subject_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| format!("Subject {}", subject_id));

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);

            ui.horizontal(|ui| {
                if ui.button("← Subjects").clicked() {
                    state.registrar.roster_subject_id = None;
                    state.navigate(AppView::Subjects);
                }
                ui.heading(
                    egui::RichText::new(format!("Roster · {}", subject_name))
                        .color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(12.0);

            if let Some(notice) = state.registrar.notice.clone() {
                ui.colored_label(colors::ERROR, notice);
                if ui.small_button("Dismiss").clicked() {
                    state.registrar.notice = None;
                }
                ui.add_space(8.0);
            }

            styles::panel_card_frame().show(ui, |ui| {
                if state.registrar.roster.is_loading() && state.registrar.roster.items().is_empty() {
                    ui.spinner();
                    return;
                }
                if state.registrar.roster.items().is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No students enrolled");
                    return;
                }

                let students: Vec<(i64, String)> = state
                    .registrar
                    .roster
                    .items()
                    .iter()
                    .map(|s| (s.id, s.display_name()))
                    .collect();

                let mut save_for: Option<i64> = None;

                for (student_id, name) in &students {
                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_DARK, egui::RichText::new(name).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Save").clicked() {
                                save_for = Some(*student_id);
                            }
                            let input = state
                                .registrar
                                .grade_inputs
                                .entry(*student_id)
                                .or_default();
                            ui.add(
                                egui::TextEdit::singleline(input)
                                    .hint_text("Score")
                                    .desired_width(60.0),
                            );
                        });
                    });
                    ui.separator();
                }

                if let Some(student_id) = save_for {
                    let config = state.config.clone();
                    state.registrar.record_grade(&config, &session, student_id);
                }
            });
        });
    });
}

fn render_pick_subject(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.colored_label(colors::TEXT_LIGHT, "Pick a subject to open its roster");
        ui.add_space(12.0);
        if ui.button("Go to subjects").clicked() {
            state.navigate(AppView::Subjects);
        }
    });
}
