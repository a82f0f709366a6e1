//! Painter-backed charts for the dashboard sections.
//!
//! Each function allocates its own rect in the current `Ui` and draws from
//! plain series data; nothing is retained between frames.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

use super::chart_math::{
    Bounds, arc_points, bubble_radius, category_x, contrast_text, donut_arcs, nice_ceiling,
    normalize, sample_scale, to_screen,
};
use super::style;
use crate::portfolio::sample_data::{
    Bar, Bubble, Cluster, ConfusionMatrix, HeatmapData, LineChartData, PieData,
};

const AXIS_FONT: f32 = 11.0;
const Y_AXIS_GUTTER: f32 = 36.0;
const X_AXIS_GUTTER: f32 = 18.0;
const GRID_LINES: usize = 4;

/// How one line series is drawn.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LineStyle {
    pub color: Color32,
    pub width: f32,
    /// Area fill down to zero.
    pub fill: Option<Color32>,
    pub dashed: bool,
    pub markers: bool,
}

impl LineStyle {
    pub(crate) fn solid(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            fill: None,
            dashed: false,
            markers: false,
        }
    }
}

/// Marker look for one scatter cluster.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MarkerStyle {
    pub color: Color32,
    pub radius: f32,
    pub opacity: f32,
}

pub(crate) fn legend(ui: &mut Ui, entries: &[(&str, Color32)]) {
    let palette = style::palette();
    ui.horizontal_wrapped(|ui| {
        for (label, color) in entries {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, *color);
            ui.label(egui::RichText::new(*label).size(AXIS_FONT).color(palette.text_muted));
            ui.add_space(10.0);
        }
    });
}

fn axis_text(painter: &egui::Painter, pos: Pos2, anchor: Align2, text: impl ToString) {
    painter.text(
        pos,
        anchor,
        text.to_string(),
        FontId::proportional(AXIS_FONT),
        style::palette().text_muted,
    );
}

/// Multi-series line chart over categorical x labels.
pub(crate) fn line_chart(ui: &mut Ui, data: &LineChartData, styles: &[LineStyle], height: f32) {
    let entries: Vec<_> = data
        .series
        .iter()
        .zip(styles)
        .map(|(series, style)| (series.name, style.color))
        .collect();
    legend(ui, &entries);

    let (outer, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    let plot = Rect::from_min_max(
        egui::pos2(outer.min.x + Y_AXIS_GUTTER, outer.min.y + 6.0),
        egui::pos2(outer.max.x - 6.0, outer.max.y - X_AXIS_GUTTER),
    );
    let y_max = nice_ceiling(data.max_value());
    let palette = style::palette();

    for step in 0..=GRID_LINES {
        let value = y_max * step as f32 / GRID_LINES as f32;
        let y = plot.max.y - plot.height() * step as f32 / GRID_LINES as f32;
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            Stroke::new(1.0, palette.grid),
        );
        axis_text(&painter, egui::pos2(plot.min.x - 6.0, y), Align2::RIGHT_CENTER, value.round());
    }

    let count = data.x_labels.len();
    let label_every = ((count as f32 * 52.0) / plot.width().max(1.0)).ceil().max(1.0) as usize;
    for (index, label) in data.x_labels.iter().enumerate().step_by(label_every) {
        let x = category_x(plot, index, count);
        axis_text(&painter, egui::pos2(x, plot.max.y + 4.0), Align2::CENTER_TOP, label);
    }

    let to_pos = |index: usize, value: f32| {
        egui::pos2(
            category_x(plot, index, count),
            plot.max.y - normalize(value, 0.0, y_max) * plot.height(),
        )
    };

    for (series, line) in data.series.iter().zip(styles) {
        let points: Vec<Pos2> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| to_pos(i, *v))
            .collect();
        if let Some(fill) = line.fill {
            for pair in points.windows(2) {
                painter.add(Shape::convex_polygon(
                    vec![
                        pair[0],
                        pair[1],
                        egui::pos2(pair[1].x, plot.max.y),
                        egui::pos2(pair[0].x, plot.max.y),
                    ],
                    fill,
                    Stroke::NONE,
                ));
            }
        }
        let stroke = Stroke::new(line.width, line.color);
        if line.dashed {
            painter.extend(Shape::dashed_line(&points, stroke, 8.0, 5.0));
        } else {
            painter.add(Shape::line(points.clone(), stroke));
        }
        if line.markers {
            for point in &points {
                painter.circle_filled(*point, 3.0, line.color);
            }
        }
    }

    if let Some(pointer) = response.hover_pos()
        && plot.contains(pointer)
        && count > 0
    {
        let index = nearest_category(plot, pointer.x, count);
        let x = category_x(plot, index, count);
        painter.line_segment(
            [egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)],
            Stroke::new(1.0, palette.text_muted.gamma_multiply(0.5)),
        );
        let summary = data
            .series
            .iter()
            .filter_map(|s| s.values.get(index).map(|v| format!("{}: {v}", s.name)))
            .collect::<Vec<_>>()
            .join("\n");
        response.on_hover_text_at_pointer(format!("{}\n{summary}", data.x_labels[index]));
    }
}

fn nearest_category(plot: Rect, x: f32, count: usize) -> usize {
    if count <= 1 {
        return 0;
    }
    let t = normalize(x, plot.min.x, plot.max.x);
    ((t * (count - 1) as f32).round() as usize).min(count - 1)
}

/// Row-labelled heatmap; darker cells are lower values.
pub(crate) fn heatmap(ui: &mut Ui, data: &HeatmapData, scale: &[Color32], height: f32) {
    let (outer, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    let grid = Rect::from_min_max(
        egui::pos2(outer.min.x + 96.0, outer.min.y),
        egui::pos2(outer.max.x, outer.max.y - X_AXIS_GUTTER),
    );
    let rows = data.values.len();
    let cols = data.x_labels.len();
    if rows == 0 || cols == 0 {
        return;
    }
    let (lo, hi) = data.value_range();
    let cell = egui::vec2(grid.width() / cols as f32, grid.height() / rows as f32);

    for (row, cells) in data.values.iter().enumerate() {
        let y = grid.min.y + cell.y * row as f32;
        if let Some(label) = data.y_labels.get(row) {
            axis_text(
                &painter,
                egui::pos2(grid.min.x - 6.0, y + cell.y * 0.5),
                Align2::RIGHT_CENTER,
                label,
            );
        }
        for (col, value) in cells.iter().enumerate() {
            let min = egui::pos2(grid.min.x + cell.x * col as f32, y);
            let rect = Rect::from_min_size(min, cell).shrink(0.5);
            painter.rect_filled(rect, 0.0, sample_scale(scale, normalize(*value, lo, hi)));
        }
    }
    for (col, label) in data.x_labels.iter().enumerate() {
        let x = grid.min.x + cell.x * (col as f32 + 0.5);
        axis_text(&painter, egui::pos2(x, grid.max.y + 3.0), Align2::CENTER_TOP, label);
    }

    if let Some(pointer) = response.hover_pos()
        && grid.contains(pointer)
    {
        let col = (((pointer.x - grid.min.x) / cell.x) as usize).min(cols - 1);
        let row = (((pointer.y - grid.min.y) / cell.y) as usize).min(rows - 1);
        if let (Some(region), Some(month), Some(value)) = (
            data.y_labels.get(row),
            data.x_labels.get(col),
            data.values.get(row).and_then(|cells| cells.get(col)),
        ) {
            response.on_hover_text_at_pointer(format!("{region} · {month}: {value}"));
        }
    }
}

/// Spend vs revenue bubbles; size tracks revenue, colour tracks ROI.
pub(crate) fn bubble_chart(ui: &mut Ui, campaigns: &[Bubble], scale: &[Color32], height: f32) {
    let (outer, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    let plot = Rect::from_min_max(
        egui::pos2(outer.min.x + Y_AXIS_GUTTER, outer.min.y + 6.0),
        egui::pos2(outer.max.x - 10.0, outer.max.y - 2.0 * X_AXIS_GUTTER),
    );
    let Some(bounds) = Bounds::around(campaigns.iter().map(|b| [b.spend, b.revenue]), 0.12) else {
        return;
    };
    let palette = style::palette();
    for step in 0..=GRID_LINES {
        let y = plot.max.y - plot.height() * step as f32 / GRID_LINES as f32;
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            Stroke::new(1.0, palette.grid),
        );
        let value = bounds.min_y + (bounds.max_y - bounds.min_y) * step as f32 / GRID_LINES as f32;
        axis_text(&painter, egui::pos2(plot.min.x - 6.0, y), Align2::RIGHT_CENTER, value.round());
    }
    for step in 0..=GRID_LINES {
        let x = plot.min.x + plot.width() * step as f32 / GRID_LINES as f32;
        let value = bounds.min_x + (bounds.max_x - bounds.min_x) * step as f32 / GRID_LINES as f32;
        axis_text(&painter, egui::pos2(x, plot.max.y + 3.0), Align2::CENTER_TOP, value.round());
    }
    axis_text(
        &painter,
        egui::pos2(plot.center().x, outer.max.y),
        Align2::CENTER_BOTTOM,
        "Ad Spend ($k)",
    );
    axis_text(
        &painter,
        egui::pos2(outer.min.x, plot.min.y),
        Align2::LEFT_BOTTOM,
        "Revenue ($k)",
    );

    let (rev_lo, rev_hi) = min_max(campaigns.iter().map(|b| b.revenue));
    let (roi_lo, roi_hi) = min_max(campaigns.iter().map(|b| b.roi));
    let mut hovered: Option<&Bubble> = None;
    let pointer = response.hover_pos();
    for bubble in campaigns {
        let center = to_screen(plot, bubble.spend, bubble.revenue, &bounds);
        let radius = bubble_radius(bubble.revenue, rev_lo, rev_hi, 4.0, 16.0);
        let color = sample_scale(scale, normalize(bubble.roi, roi_lo, roi_hi));
        painter.circle(
            center,
            radius,
            color.gamma_multiply(0.85),
            Stroke::new(1.0, palette.bg_deep),
        );
        if pointer.is_some_and(|p| p.distance(center) <= radius) {
            hovered = Some(bubble);
        }
    }
    if let Some(bubble) = hovered {
        response.on_hover_text_at_pointer(format!(
            "{}\nSpend: {}k\nRevenue: {}k\nROI: {:.2}",
            bubble.campaign, bubble.spend, bubble.revenue, bubble.roi
        ));
    }
}

fn min_max(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Ring chart with the grand total printed in the hole.
pub(crate) fn donut(ui: &mut Ui, data: &PieData, colors: &[Color32], height: f32) {
    let (outer, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    let palette = style::palette();
    let legend_width = 110.0;
    let chart = Rect::from_min_max(outer.min, egui::pos2(outer.max.x - legend_width, outer.max.y));
    let center = chart.center();
    let radius = chart.width().min(chart.height()) * 0.45;
    let thickness = radius * 0.3;
    let ring_radius = radius - thickness * 0.5;

    let arcs = donut_arcs(&data.fractions());
    for (index, (from, to)) in arcs.iter().enumerate() {
        let color = colors.get(index).copied().unwrap_or(palette.neutral_gray);
        painter.add(Shape::line(
            arc_points(center, ring_radius, *from, *to),
            Stroke::new(thickness, color),
        ));
    }
    painter.text(
        center,
        Align2::CENTER_CENTER,
        data.total().to_string(),
        FontId::proportional(20.0),
        palette.text_primary,
    );

    let mut y = chart.min.y + 12.0;
    for (index, slice) in data.slices.iter().enumerate() {
        let color = colors.get(index).copied().unwrap_or(palette.neutral_gray);
        let swatch = Rect::from_min_size(egui::pos2(chart.max.x + 8.0, y - 5.0), egui::vec2(10.0, 10.0));
        painter.rect_filled(swatch, 2.0, color);
        axis_text(
            &painter,
            egui::pos2(swatch.max.x + 6.0, y),
            Align2::LEFT_CENTER,
            slice.label,
        );
        y += 20.0;
    }

    if let Some(pointer) = response.hover_pos() {
        let offset = pointer - center;
        let distance = offset.length();
        if distance >= radius - thickness && distance <= radius {
            let hovered = hovered_slice(&arcs, offset.y.atan2(offset.x));
            if let Some(slice) = hovered.and_then(|i| data.slices.get(i)) {
                let share = slice.value as f32 / data.total().max(1) as f32 * 100.0;
                response.on_hover_text_at_pointer(format!(
                    "{}: {} ({share:.1}%)",
                    slice.label, slice.value
                ));
            }
        }
    }
}

fn hovered_slice(arcs: &[(f32, f32)], angle: f32) -> Option<usize> {
    let start = arcs.first()?.0;
    let mut angle = angle;
    while angle < start {
        angle += std::f32::consts::TAU;
    }
    arcs.iter().position(|(from, to)| angle >= *from && angle < *to)
}

/// Horizontal bars, first entry at the bottom.
pub(crate) fn horizontal_bars(ui: &mut Ui, bars: &[Bar], scale: &[Color32], height: f32) {
    let (outer, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    if bars.is_empty() {
        return;
    }
    let label_width = 150.0;
    let track = Rect::from_min_max(egui::pos2(outer.min.x + label_width, outer.min.y), outer.max);
    let (lo, hi) = min_max(bars.iter().map(|b| b.value));
    let max = hi.max(f32::EPSILON);
    let row_height = track.height() / bars.len() as f32;

    for (index, bar) in bars.iter().enumerate() {
        let row = bars.len() - 1 - index;
        let top = track.min.y + row_height * row as f32;
        let rect = Rect::from_min_size(
            egui::pos2(track.min.x, top + row_height * 0.15),
            egui::vec2(track.width() * (bar.value / max), row_height * 0.7),
        );
        painter.rect_filled(rect, 3.0, sample_scale(scale, normalize(bar.value, lo, hi)));
        axis_text(
            &painter,
            egui::pos2(track.min.x - 8.0, rect.center().y),
            Align2::RIGHT_CENTER,
            bar.label,
        );
    }
}

/// Unlabelled scatter of labelled point clouds with a legend below.
pub(crate) fn cluster_scatter(ui: &mut Ui, clusters: &[Cluster], styles: &[MarkerStyle], height: f32) {
    let (outer, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    let plot = outer.shrink(8.0);
    let Some(bounds) = Bounds::around(clusters.iter().flat_map(|c| c.points.iter().copied()), 0.05)
    else {
        return;
    };
    for (cluster, marker) in clusters.iter().zip(styles) {
        let color = marker.color.gamma_multiply(marker.opacity);
        for [x, y] in &cluster.points {
            painter.circle_filled(to_screen(plot, *x, *y, &bounds), marker.radius, color);
        }
    }
    let entries: Vec<_> = clusters
        .iter()
        .zip(styles)
        .map(|(cluster, marker)| (cluster.name, marker.color))
        .collect();
    legend(ui, &entries);
}

/// Annotated confusion matrix; rows are actual classes.
pub(crate) fn confusion_matrix(ui: &mut Ui, matrix: &ConfusionMatrix, scale: &[Color32], height: f32) {
    let (outer, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);
    let n = matrix.labels.len();
    if n == 0 {
        return;
    }
    let grid = Rect::from_min_max(
        egui::pos2(outer.min.x + 64.0, outer.min.y),
        egui::pos2(outer.max.x, outer.max.y - X_AXIS_GUTTER),
    );
    let cell = egui::vec2(grid.width() / n as f32, grid.height() / n as f32);
    let max = matrix.max_count() as f32;

    for (row, counts) in matrix.counts.iter().enumerate() {
        for (col, count) in counts.iter().enumerate() {
            let rect = Rect::from_min_size(
                egui::pos2(grid.min.x + cell.x * col as f32, grid.min.y + cell.y * row as f32),
                cell,
            )
            .shrink(1.0);
            let fill = sample_scale(scale, normalize(*count as f32, 0.0, max));
            painter.rect_filled(rect, 0.0, fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                count.to_string(),
                FontId::proportional(14.0),
                contrast_text(fill),
            );
        }
    }
    for (index, label) in matrix.labels.iter().enumerate() {
        axis_text(
            &painter,
            egui::pos2(grid.min.x - 6.0, grid.min.y + cell.y * (index as f32 + 0.5)),
            Align2::RIGHT_CENTER,
            label,
        );
        axis_text(
            &painter,
            egui::pos2(grid.min.x + cell.x * (index as f32 + 0.5), grid.max.y + 3.0),
            Align2::CENTER_TOP,
            label,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_category_snaps_to_closest_label() {
        let plot = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(110.0, 10.0));
        assert_eq!(nearest_category(plot, 0.0, 12), 0);
        assert_eq!(nearest_category(plot, 54.0, 12), 5);
        assert_eq!(nearest_category(plot, 500.0, 12), 11);
        assert_eq!(nearest_category(plot, 50.0, 1), 0);
    }

    #[test]
    fn hovered_slice_wraps_angles_before_start() {
        let arcs = donut_arcs(&[0.5, 0.5]);
        // Straight up is the start of the first slice.
        assert_eq!(hovered_slice(&arcs, -std::f32::consts::FRAC_PI_2 + 0.01), Some(0));
        // Straight down lies in the second half.
        assert_eq!(hovered_slice(&arcs, std::f32::consts::FRAC_PI_2 + 0.01), Some(1));
        // Just left of 12 o'clock, reported by atan2 as a negative angle.
        assert_eq!(hovered_slice(&arcs, -std::f32::consts::FRAC_PI_2 - 0.01), Some(1));
        assert_eq!(hovered_slice(&[], 0.0), None);
    }

    #[test]
    fn min_max_tracks_extremes() {
        assert_eq!(min_max([3.0, -1.0, 7.5].into_iter()), (-1.0, 7.5));
    }
}
