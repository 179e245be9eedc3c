//! User account management (admin).

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::model::Role;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.session.clone() else {
        return;
    };

    state.registrar.poll(&state.config, &session);
    if !state.registrar.users.started() {
        let config = state.config.clone();
        state.registrar.load_users(&config, &session);
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(720.0);

            ui.heading(egui::RichText::new("User accounts").color(colors::TEXT_LIGHT));
            ui.add_space(12.0);

            if let Some(notice) = state.registrar.notice.clone() {
                ui.colored_label(colors::ERROR, notice);
                if ui.small_button("Dismiss").clicked() {
                    state.registrar.notice = None;
                }
                ui.add_space(8.0);
            }

            styles::panel_card_frame().show(ui, |ui| {
                ui.label(egui::RichText::new("New account").strong().color(colors::TEXT_DARK));
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.registrar.user_form.first_name)
                            .hint_text("First name")
                            .desired_width(140.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.registrar.user_form.last_name)
                            .hint_text("Last name")
                            .desired_width(140.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.registrar.user_form.email)
                            .hint_text("Email")
                            .desired_width(200.0),
                    );

                    egui::ComboBox::from_id_salt("new_user_role")
                        .selected_text(state.registrar.user_form.role.label())
                        .show_ui(ui, |ui| {
                            for role in [Role::Student, Role::Instructor, Role::Admin] {
                                ui.selectable_value(
                                    &mut state.registrar.user_form.role,
                                    role,
                                    role.label(),
                                );
                            }
                        });

                    if ui.button("Create").clicked() {
                        let config = state.config.clone();
                        state.registrar.create_user(&config, &session);
                    }
                });
            });

            ui.add_space(16.0);

            styles::panel_card_frame().show(ui, |ui| {
                if state.registrar.users.is_loading() && state.registrar.users.items().is_empty() {
                    ui.spinner();
                    return;
                }
                if state.registrar.users.items().is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No accounts yet");
                    return;
                }

                let mut delete_id: Option<i64> = None;
                for user in state.registrar.users.items() {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            colors::TEXT_DARK,
                            egui::RichText::new(user.display_name()).strong(),
                        );
                        ui.colored_label(colors::TEXT_SECONDARY, &user.email);
                        ui.colored_label(colors::TEXT_SECONDARY, user.role.label());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("🗑").clicked() {
                                delete_id = Some(user.id);
                            }
                        });
                    });
                    ui.separator();
                }

                if let Some(user_id) = delete_id {
                    let config = state.config.clone();
                    state.registrar.delete_user(&config, &session, user_id);
                }
            });
        });
    });
}
