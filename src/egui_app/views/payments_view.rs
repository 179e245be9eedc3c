//! Payments: registration for admins, read-only history for students.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::model::Role;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.session.clone() else {
        return;
    };

    state.registrar.poll(&state.config, &session);
    if !state.registrar.payments.started() {
        let config = state.config.clone();
        state.registrar.load_payments(&config, &session);
    }

    let is_admin = session.role == Role::Admin;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);

            let title = if is_admin { "Payments" } else { "My payments" };
            ui.heading(egui::RichText::new(title).color(colors::TEXT_LIGHT));
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
                    ui.label(
                        egui::RichText::new("Register payment").strong().color(colors::TEXT_DARK),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.payment_form.user_id)
                                .hint_text("User id")
                                .desired_width(70.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.payment_form.concept)
                                .hint_text("Concept")
                                .desired_width(220.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.registrar.payment_form.amount)
                                .hint_text("Amount")
                                .desired_width(90.0),
                        );
                        if ui.button("Register").clicked() {
                            let config = state.config.clone();
                            state.registrar.register_payment(&config, &session);
                        }
                    });
                });
                ui.add_space(16.0);
            }

            styles::panel_card_frame().show(ui, |ui| {
                if state.registrar.payments.is_loading() && state.registrar.payments.items().is_empty() {
                    ui.spinner();
                    return;
                }
                if state.registrar.payments.items().is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No payments registered");
                    return;
                }

                for payment in state.registrar.payments.items() {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            payment.date.split('T').next().unwrap_or(&payment.date),
                        );
                        ui.colored_label(
                            colors::TEXT_DARK,
                            egui::RichText::new(&payment.concept).strong(),
                        );
                        if is_admin {
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                format!("user {}", payment.user_id),
                            );
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(
                                colors::ACCENT,
                                egui::RichText::new(format!("$ {:.2}", payment.amount)).strong(),
                            );
                        });
                    });
                    ui.separator();
                }
            });
        });
    });
}
