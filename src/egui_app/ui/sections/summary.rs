use super::*;
use crate::portfolio::sample_data::SummaryData;

pub(super) fn render(ui: &mut Ui, data: &SummaryData) {
    let palette = style::palette();
    for line in content::HERO_LINES {
        ui.label(RichText::new(line).size(60.0).strong().color(palette.text_primary));
    }
    ui.add_space(8.0);
    ui.label(RichText::new(content::BYLINE).size(20.0).color(palette.text_muted));
    ui.add_space(40.0);

    ui.columns(data.metrics.len().max(1), |columns| {
        for (column, metric) in columns.iter_mut().zip(&data.metrics) {
            metric_card(column, metric.label, metric.value, metric.delta, palette.accent_cyan);
        }
    });

    ui.add_space(32.0);
    ui.label(
        RichText::new("SELECTED WORKS")
            .size(18.0)
            .extra_letter_spacing(1.0)
            .color(palette.text_primary),
    );
    ui.add_space(12.0);
    ui.columns(content::SELECTED_WORKS.len(), |columns| {
        for (column, work) in columns.iter_mut().zip(content::SELECTED_WORKS) {
            info_card(column, Some(work.title), work.body, palette.accent_cyan);
        }
    });
}
