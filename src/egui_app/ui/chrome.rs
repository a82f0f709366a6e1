use super::style;
use super::*;
use crate::portfolio::{Section, content};
use eframe::egui::{Color32, CornerRadius, RichText, Stroke};

const SIDEBAR_WIDTH: f32 = 240.0;

impl EguiApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let mut picked = None;
        egui::SidePanel::left("navigation")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .frame(
                Frame::new()
                    .fill(palette.sidebar)
                    .stroke(Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 13)))
                    .inner_margin(Margin::symmetric(18, 24)),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(content::SIDEBAR_HEADING)
                        .size(16.0)
                        .extra_letter_spacing(2.0)
                        .color(palette.text_muted),
                );
                ui.add_space(16.0);
                let current = self.controller.section();
                for section in Section::ALL {
                    if ui.radio(current == section, section.nav_label()).clicked() {
                        picked = Some(section);
                    }
                    ui.add_space(4.0);
                }
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);
                tech_stack_card(ui);
            });
        if let Some(section) = picked {
            self.controller.select_section(section);
        }
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_deep)
                    .stroke(Stroke::new(1.0, palette.glass_outline))
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(badge_rect.center(), 6.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }
}

fn tech_stack_card(ui: &mut egui::Ui) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.glass_fill)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("TECH STACK")
                    .small()
                    .strong()
                    .color(palette.text_muted),
            );
            ui.horizontal(|ui| {
                for tool in content::TECH_STACK {
                    ui.label(RichText::new(tool).color(palette.accent_cyan));
                }
            });
        });
}

/// Soft navy glow in the top-left corner of the content area.
pub(super) fn paint_backdrop(ui: &egui::Ui) {
    let palette = style::palette();
    let rect = ui.max_rect().expand(32.0);
    let painter = ui.painter_at(rect);
    let focus = rect.min + egui::vec2(rect.width() * 0.1, rect.height() * 0.2);
    let reach = rect.width().max(rect.height()) * 0.9;
    const RINGS: usize = 12;
    for ring in (1..=RINGS).rev() {
        let t = ring as f32 / RINGS as f32;
        let alpha = ((1.0 - t) * 36.0) as u8 + 4;
        let color = Color32::from_rgba_unmultiplied(
            palette.bg_navy.r(),
            palette.bg_navy.g(),
            palette.bg_navy.b(),
            alpha,
        );
        painter.circle_filled(focus, reach * t, color);
    }
}
