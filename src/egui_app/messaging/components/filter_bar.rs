//! Filter Bar Component
//!
//! Local, network-free filter over the conversation list.

use eframe::egui;

use crate::egui_app::messaging::state::MessagingState;

/// Render the filter bar
pub fn render(ui: &mut egui::Ui, state: &mut MessagingState) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label("🔍");

        ui.add(
            egui::TextEdit::singleline(&mut state.filter_input)
                .hint_text("Filter conversations...")
                .desired_width(ui.available_width() - 40.0),
        );

        if !state.filter_input.is_empty() && ui.button("✕").clicked() {
            state.filter_input.clear();
        }

        ui.add_space(8.0);
    });
}
