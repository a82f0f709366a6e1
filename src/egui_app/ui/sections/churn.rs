use super::*;
use crate::egui_app::ui::charts;
use crate::portfolio::{
    RiskStatus, Section,
    content::case_study,
    risk::{LOGIN_FREQUENCY_RANGE, SUPPORT_TICKETS_RANGE},
    sample_data::ChurnData,
};

pub(super) fn render(ui: &mut Ui, state: &AppState, data: &ChurnData) -> Vec<Action> {
    let palette = style::palette();
    let mut actions = Vec::new();
    let Some(study) = case_study(Section::ChurnPrediction) else {
        return actions;
    };
    case_study_header(ui, study);

    ui.horizontal_top(|ui| {
        let width = ui.available_width();
        ui.vertical(|ui| {
            ui.set_width(width / 3.0 - 12.0);
            chart_title(ui, "01. RISK SIMULATOR");
            ui.label("Adjust usage patterns:");
            ui.add_space(8.0);

            let inputs = state.risk_inputs();
            let mut logins = inputs.login_frequency();
            if ui
                .add(egui::Slider::new(&mut logins, LOGIN_FREQUENCY_RANGE).text("Logins / Week"))
                .changed()
            {
                actions.push(Action::SetLoginFrequency(logins));
            }
            let mut tickets = inputs.support_tickets();
            if ui
                .add(egui::Slider::new(&mut tickets, SUPPORT_TICKETS_RANGE).text("Support Tickets"))
                .changed()
            {
                actions.push(Action::SetSupportTickets(tickets));
            }
            ui.add_space(12.0);

            // Recompute from the slider values so the metric tracks this frame's drag.
            let score = crate::portfolio::compute_risk(logins, tickets);
            let status = score.status();
            metric_card(
                ui,
                "Churn Probability",
                &score.percent_label(),
                status.label(),
                status_delta_color(status),
            );
        });
        ui.add_space(24.0);
        ui.vertical(|ui| {
            chart_title(ui, "02. CUSTOMER SEGMENTATION");
            let colors = [palette.accent_cyan, palette.slate, palette.alert_red];
            charts::donut(ui, &data.segments, &colors, 280.0);
        });
    });

    ui.add_space(32.0);
    chart_title(ui, "03. MODEL EXPLAINABILITY (Top Churn Drivers)");
    caption(ui, "Which variables contribute most to the risk score?");
    charts::horizontal_bars(ui, &data.drivers, &style::TEAL, 300.0);

    architect_note(ui, study);
    actions
}

/// Critical reads as the alarming direction; Stable stays in the accent colour.
pub(super) fn status_delta_color(status: RiskStatus) -> Color32 {
    let palette = style::palette();
    match status {
        RiskStatus::Critical => palette.alert_red,
        RiskStatus::Stable => palette.accent_cyan,
    }
}
