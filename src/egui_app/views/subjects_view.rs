//! Subject catalogue.
//!
//! Admins create and delete subjects; students enroll and see their
//! grades; instructors jump from a subject into its roster.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::shared::model::Role;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.session.clone() else {
        return;
    };

    state.registrar.poll(&state.config, &session);
    if !state.registrar.subjects.started() {
        let config = state.config.clone();
        state.registrar.load_subjects(&config, &session);
    }
    if session.role == Role::Student && !state.registrar.grades.started() {
        let config = state.config.clone();
        state.registrar.load_grades(&config, &session);
    }

    let mut open_roster: Option<i64> = None;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(680.0);

            ui.heading(egui::RichText::new("Subjects").color(colors::TEXT_LIGHT));
            ui.add_space(12.0);

            if let Some(notice) = state.registrar.notice.clone() {
                ui.colored_label(colors::ERROR, notice);
                if ui.small_button("Dismiss").clicked() {
                    state.registrar.notice = None;
                }
                ui.add_space(8.0);
            }

            if session.role == Role::Admin {
                styles::panel_card_frame().show(ui, |ui| {
                    ui.label(egui::RichText::new("New subject").strong().color(colors::TEXT_DARK));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.subject_form.name)
                                .hint_text("Name")
                                .desired_width(220.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.subject_form.career_id)
                                .hint_text("Career id")
                                .desired_width(80.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.subject_form.year)
                                .hint_text("Year")
                                .desired_width(50.0),
                        );
                        if ui.button("Create").clicked() {
                            let config = state.config.clone();
                            state.registrar.create_subject(&config, &session);
                        }
                    });
                });
                ui.add_space(16.0);
            }

            styles::panel_card_frame().show(ui, |ui| {
                if state.registrar.subjects.is_loading() && state.registrar.subjects.items().is_empty() {
                    ui.spinner();
                    return;
                }
                if state.registrar.subjects.items().is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No subjects in the catalogue");
                    return;
                }

                let mut delete_id: Option<i64> = None;
                let mut enroll_id: Option<i64> = None;

                for subject in state.registrar.subjects.items() {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            colors::TEXT_DARK,
                            egui::RichText::new(&subject.name).strong(),
                        );
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            format!("year {} · career {}", subject.year, subject.career_id),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            match session.role {
                                Role::Admin => {
                                    if ui.small_button("🗑").clicked() {
                                        delete_id = Some(subject.id);
                                    }
                                }
                                Role::Student => {
                                    if ui.small_button("Enroll").clicked() {
                                        enroll_id = Some(subject.id);
                                    }
                                }
                                Role::Instructor => {
                                    if ui.small_button("Open roster").clicked() {
                                        open_roster = Some(subject.id);
                                    }
                                }
                            }
                        });
                    });
                    ui.separator();
                }

                if let Some(subject_id) = delete_id {
                    let config = state.config.clone();
                    state.registrar.delete_subject(&config, &session, subject_id);
                }
                if let Some(subject_id) = enroll_id {
                    let config = state.config.clone();
                    state.registrar.enroll(&config, &session, subject_id);
                }
            });

            if session.role == Role::Student {
                ui.add_space(16.0);
                styles::panel_card_frame().show(ui, |ui| {
                    ui.label(egui::RichText::new("My grades").strong().color(colors::TEXT_DARK));
                    ui.add_space(8.0);

                    if state.registrar.grades.items().is_empty() {
                        ui.colored_label(colors::TEXT_SECONDARY, "No grades recorded yet");
                        return;
                    }

                    for grade in state.registrar.grades.items() {
                        ui.horizontal(|ui| {
                            let subject = grade
                                .subject_name
                                .clone()
                                .unwrap_or_else(|| format!("Subject {}", grade.subject_id));
                            ui.colored_label(colors::TEXT_DARK, subject);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.colored_label(
                                        colors::ACCENT,
                                        egui::RichText::new(format!("{:.1}", grade.score)).strong(),
                                    );
                                },
                            );
                        });
                    }
                });
            }
        });
    });

    if let Some(subject_id) = open_roster {
        let config = state.config.clone();
        state.registrar.load_roster(&config, &session, subject_id);
        state.navigate(AppView::SubjectRoster);
    }
}
