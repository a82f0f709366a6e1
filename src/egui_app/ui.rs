//! egui renderer for the dashboard.

mod chart_math;
mod charts;
mod chrome;
mod sections;
pub mod style;

use std::time::Instant;

use crate::config::AppSettings;
use crate::egui_app::controller::DashboardController;
use eframe::egui::{self, Frame, Margin};

/// Smallest window that still fits the two-column layouts.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Renders the dashboard from the controller's state.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            controller: DashboardController::new(settings),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_content(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let actions = egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_deep)
                    .inner_margin(Margin::symmetric(32, 24)),
            )
            .show(ctx, |ui| {
                chrome::paint_backdrop(ui);
                egui::ScrollArea::vertical()
                    .id_salt("section_scroll")
                    .show(ui, |ui| {
                        sections::render_section(
                            ui,
                            self.controller.state(),
                            self.controller.section_data(),
                            self.controller.is_classifying(),
                        )
                    })
                    .inner
            })
            .inner;
        let now = Instant::now();
        let ran = !actions.is_empty();
        for action in actions {
            self.controller.dispatch(action, now);
        }
        if ran {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        if let Some(remaining) = self.controller.tick(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
        self.render_sidebar(ctx);
        self.render_status(ctx);
        self.render_content(ctx);
    }
}
