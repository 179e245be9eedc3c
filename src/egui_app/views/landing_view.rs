use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.session.clone() else {
        return;
    };

    let mut nav_target: Option<AppView> = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);

        ui.label(
            egui::RichText::new(format!("Welcome, {}", session.first_name))
                .size(28.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(4.0);
        ui.colored_label(colors::TEXT_SECONDARY, session.role.label());
        ui.add_space(24.0);

        for view in AppView::available_for(session.role) {
            if ui
                .add_sized(
                    [220.0, 36.0],
                    egui::Button::new(
                        egui::RichText::new(view.label()).color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::ACCENT),
                )
                .clicked()
            {
                nav_target = Some(*view);
            }
            ui.add_space(8.0);
        }
    });

    if let Some(target) = nav_target {
        state.navigate(target);
    }
}
