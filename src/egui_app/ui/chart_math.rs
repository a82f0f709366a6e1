use eframe::egui::{self, Color32};

/// Map `value` from `[lo, hi]` to `[0, 1]`, clamping; a flat range maps to 0.5.
pub(crate) fn normalize(value: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span.abs() <= f32::EPSILON {
        return 0.5;
    }
    ((value - lo) / span).clamp(0.0, 1.0)
}

/// Round an axis maximum up to 1, 2, 2.5 or 5 times a power of ten.
pub(crate) fn nice_ceiling(value: f32) -> f32 {
    if value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f32.powf(value.log10().floor());
    let scaled = value / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| scaled <= *step + f32::EPSILON)
        .unwrap_or(10.0);
    step * magnitude
}

/// Sample a piecewise-linear colour scale at `t` in `[0, 1]`.
pub(crate) fn sample_scale(stops: &[Color32], t: f32) -> Color32 {
    match stops {
        [] => Color32::TRANSPARENT,
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
            let index = (t.floor() as usize).min(stops.len() - 2);
            lerp_color(stops[index], stops[index + 1], t - index as f32)
        }
    }
}

pub(crate) fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Black or white, whichever reads better on `fill`.
pub(crate) fn contrast_text(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 140.0 {
        Color32::from_rgb(20, 24, 28)
    } else {
        Color32::WHITE
    }
}

/// Screen position for data coordinates inside `rect` (y grows upward).
pub(crate) fn to_screen(rect: egui::Rect, x: f32, y: f32, bounds: &Bounds) -> egui::Pos2 {
    let fx = normalize(x, bounds.min_x, bounds.max_x);
    let fy = normalize(y, bounds.min_y, bounds.max_y);
    egui::pos2(
        rect.min.x + fx * rect.width(),
        rect.max.y - fy * rect.height(),
    )
}

/// X position of category `index` out of `count`, spread edge to edge.
pub(crate) fn category_x(rect: egui::Rect, index: usize, count: usize) -> f32 {
    if count <= 1 {
        return rect.center().x;
    }
    rect.min.x + rect.width() * index as f32 / (count - 1) as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Bounds of `points` padded by `pad` fraction of each span.
    pub(crate) fn around(points: impl IntoIterator<Item = [f32; 2]>, pad: f32) -> Option<Self> {
        let mut iter = points.into_iter();
        let [x, y] = iter.next()?;
        let mut bounds = Bounds {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        };
        for [x, y] in iter {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        let pad_x = (bounds.max_x - bounds.min_x).max(1.0) * pad;
        let pad_y = (bounds.max_y - bounds.min_y).max(1.0) * pad;
        bounds.min_x -= pad_x;
        bounds.max_x += pad_x;
        bounds.min_y -= pad_y;
        bounds.max_y += pad_y;
        Some(bounds)
    }
}

/// Start/end angles (radians, clockwise from 12 o'clock) per donut slice.
pub(crate) fn donut_arcs(fractions: &[f32]) -> Vec<(f32, f32)> {
    let start = -std::f32::consts::FRAC_PI_2;
    let mut cursor = start;
    fractions
        .iter()
        .map(|fraction| {
            let from = cursor;
            cursor += fraction * std::f32::consts::TAU;
            (from, cursor)
        })
        .collect()
}

/// Points along an arc, dense enough to look round at dashboard sizes.
pub(crate) fn arc_points(center: egui::Pos2, radius: f32, from: f32, to: f32) -> Vec<egui::Pos2> {
    let steps = (((to - from).abs() / std::f32::consts::TAU) * 96.0).ceil().max(2.0) as usize;
    (0..=steps)
        .map(|i| {
            let angle = from + (to - from) * i as f32 / steps as f32;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}

/// Bubble radius scaled by area between `min_r` and `max_r`.
pub(crate) fn bubble_radius(value: f32, lo: f32, hi: f32, min_r: f32, max_r: f32) -> f32 {
    let t = normalize(value, lo, hi);
    (min_r * min_r + t * (max_r * max_r - min_r * min_r)).sqrt()
}
