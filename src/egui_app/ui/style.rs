//! "Midnight glass" palette and frames.

use eframe::egui::{
    Color32, CornerRadius, Frame, Margin, Stroke, Visuals,
    epaint::Shadow,
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_deep: Color32,
    pub bg_navy: Color32,
    pub sidebar: Color32,
    pub glass_fill: Color32,
    pub glass_outline: Color32,
    pub grid: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_cyan: Color32,
    pub accent_pink: Color32,
    pub alert_red: Color32,
    pub slate: Color32,
    pub neutral_gray: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_deep: Color32::from_rgb(4, 6, 8),
        bg_navy: Color32::from_rgb(15, 28, 46),
        sidebar: Color32::from_rgb(4, 6, 8),
        glass_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 8),
        glass_outline: Color32::from_rgba_unmultiplied(255, 255, 255, 20),
        grid: Color32::from_rgba_unmultiplied(255, 255, 255, 26),
        text_primary: Color32::from_rgb(240, 242, 246),
        text_muted: Color32::from_rgb(136, 153, 172),
        accent_cyan: Color32::from_rgb(0, 173, 181),
        accent_pink: Color32::from_rgb(255, 46, 99),
        alert_red: Color32::from_rgb(255, 75, 75),
        slate: Color32::from_rgb(57, 62, 70),
        neutral_gray: Color32::from_rgb(102, 102, 102),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_deep;
    visuals.panel_fill = palette.bg_deep;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_navy;
    visuals.faint_bg_color = palette.bg_navy;
    visuals.selection.bg_fill = palette.accent_cyan.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_cyan);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.glass_outline);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    soften(&mut visuals.widgets.inactive, palette, palette.glass_outline);
    soften(&mut visuals.widgets.hovered, palette, palette.text_muted);
    soften(&mut visuals.widgets.active, palette, palette.accent_cyan);
    visuals.window_corner_radius = CornerRadius::same(15);
    visuals.popup_shadow = Shadow::NONE;
}

fn soften(vis: &mut WidgetVisuals, palette: Palette, outline: Color32) {
    vis.corner_radius = CornerRadius::same(10);
    vis.bg_fill = palette.slate;
    vis.weak_bg_fill = palette.glass_fill;
    vis.bg_stroke = Stroke::new(1.0, outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Translucent rounded card used for metrics and notes.
pub fn glass_card() -> Frame {
    let palette = palette();
    Frame::new()
        .fill(palette.glass_fill)
        .stroke(Stroke::new(1.0, palette.glass_outline))
        .corner_radius(CornerRadius::same(15))
        .inner_margin(Margin::same(20))
}

/// Cyan-edged "challenge" panel.
pub fn problem_box() -> Frame {
    let palette = palette();
    Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0, 173, 181, 20))
        .stroke(Stroke::new(1.0, palette.accent_cyan.gamma_multiply(0.6)))
        .corner_radius(CornerRadius {
            nw: 0,
            ne: 15,
            sw: 0,
            se: 15,
        })
        .inner_margin(Margin::same(20))
}

/// Result card for the classifier, edged in the label's colour.
pub fn result_card(edge: Color32) -> Frame {
    Frame::new()
        .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 13))
        .stroke(Stroke::new(1.0, edge))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(15))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Busy,
    Warning,
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.slate,
        StatusTone::Info => palette.accent_cyan,
        StatusTone::Busy => palette.text_muted,
        StatusTone::Warning => palette.alert_red,
    }
}

/// Approximation of the Viridis colour scale.
pub const VIRIDIS: [Color32; 5] = [
    Color32::from_rgb(68, 1, 84),
    Color32::from_rgb(59, 82, 139),
    Color32::from_rgb(33, 145, 140),
    Color32::from_rgb(94, 201, 98),
    Color32::from_rgb(253, 231, 37),
];

/// Light-to-dark teal scale.
pub const TEAL: [Color32; 4] = [
    Color32::from_rgb(209, 238, 234),
    Color32::from_rgb(133, 196, 201),
    Color32::from_rgb(66, 136, 163),
    Color32::from_rgb(42, 86, 116),
];
