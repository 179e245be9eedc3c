/**
 * AulaNet Desktop Client - Main Entry Point
 *
 * Implements eframe::App over the central AppState; every frame polls
 * finished backend calls, then renders the top bar and the active view.
 */
use aulanet::egui_app::{views, AppState};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "AulaNet",
        options,
        Box::new(|cc| {
            aulanet::egui_app::theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AulaNetApp::default()))
        }),
    )
}

/// Main application state
struct AulaNetApp {
    state: AppState,
}

impl Default for AulaNetApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for AulaNetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.frame_tick();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // Worker threads report through channels polled per frame, so
        // keep frames coming even without input.
        ctx.request_repaint();
    }
}
