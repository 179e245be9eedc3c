use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = 260.0;
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🎓 AulaNet")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            ui.label(egui::RichText::new("Sign in").size(24.0).color(colors::TEXT_LIGHT));
            ui.add_space(20.0);

            if let Some(ref error) = state.auth_state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input).text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Password:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });

            ui.add_space(20.0);

            if state.auth_state.loading {
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Signing in...");
                });
            } else {
                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_sized(
                        [120.0, 32.0],
                        egui::Button::new(egui::RichText::new("Login").color(colors::TEXT_LIGHT))
                            .fill(colors::ACCENT),
                    )
                    .clicked();

                if clicked || enter_pressed {
                    state.auth_state.clear_error();
                    state.handle_login();
                }
            }
        });
    });
}
