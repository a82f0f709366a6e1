use super::*;
use crate::egui_app::ui::charts::{self, LineStyle};
use crate::portfolio::{Section, content::case_study, sample_data::RevenueData};

pub(super) fn render(ui: &mut Ui, data: &RevenueData) {
    let palette = style::palette();
    let Some(study) = case_study(Section::RevenueAnalysis) else {
        return;
    };
    case_study_header(ui, study);

    chart_title(ui, "01. MACRO TREND: REVENUE vs SPEND");
    let styles = [
        LineStyle {
            fill: Some(Color32::from_rgba_unmultiplied(0, 173, 181, 26)),
            ..LineStyle::solid(palette.accent_cyan, 3.0)
        },
        LineStyle {
            dashed: true,
            markers: true,
            ..LineStyle::solid(palette.accent_pink, 2.0)
        },
    ];
    charts::line_chart(ui, &data.trend, &styles, 350.0);
    ui.add_space(32.0);

    ui.columns(2, |columns| {
        let [left, right] = columns else {
            return;
        };
        chart_title(left, "02. REGIONAL HEATMAP (Performance Matrix)");
        caption(left, "Identifying underperforming regions (Darker = Lower Revenue).");
        charts::heatmap(left, &data.regional, &style::VIRIDIS, 300.0);
        if let Some((region, mean)) = data.regional.weakest_row() {
            caption(left, &format!("Weakest region: {region} (avg {mean:.0})."));
        }

        chart_title(right, "03. EFFICIENCY FRONTIER (ROI Analysis)");
        caption(right, "Bubble Size = Total Profit. Top Left = High Efficiency.");
        charts::bubble_chart(right, &data.campaigns, &style::TEAL, 300.0);
    });

    architect_note(ui, study);
}
