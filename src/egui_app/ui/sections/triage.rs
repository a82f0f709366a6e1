use super::*;
use crate::egui_app::ui::charts::{self, LineStyle, MarkerStyle};
use crate::portfolio::{
    ClassificationState, Section, TriageLabel, content::case_study, sample_data::TriageData,
};

pub(super) fn render(
    ui: &mut Ui,
    state: &AppState,
    data: &TriageData,
    classifying: bool,
) -> Vec<Action> {
    let palette = style::palette();
    let mut actions = Vec::new();
    let Some(study) = case_study(Section::AiTriage) else {
        return actions;
    };
    case_study_header(ui, study);

    ui.horizontal_top(|ui| {
        let width = ui.available_width();
        ui.vertical(|ui| {
            ui.set_width(width * 2.0 / 3.0 - 12.0);
            chart_title(ui, "01. SEMANTIC VECTOR SPACE");
            caption(
                ui,
                "Visualizing how the LLM groups 5,000 emails by 'meaning' rather than keywords.",
            );
            let markers = [
                MarkerStyle {
                    color: palette.alert_red,
                    radius: 4.0,
                    opacity: 0.8,
                },
                MarkerStyle {
                    color: palette.accent_cyan,
                    radius: 4.0,
                    opacity: 0.8,
                },
                MarkerStyle {
                    color: palette.neutral_gray,
                    radius: 3.0,
                    opacity: 0.5,
                },
            ];
            charts::cluster_scatter(ui, &data.clusters, &markers, 330.0);
        });
        ui.add_space(24.0);
        ui.vertical(|ui| {
            chart_title(ui, "02. LIVE CLASSIFIER");
            caption(ui, "Test the LLM logic in real-time.");
            ui.add_space(6.0);
            ui.label("Email Content:");
            let mut email = state.email().to_string();
            let edit = ui.add(
                egui::TextEdit::multiline(&mut email)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            if edit.changed() {
                actions.push(Action::EditEmail(email));
            }
            let run = ui.add_enabled(!classifying, egui::Button::new("Run Classification"));
            if run.clicked() {
                actions.push(Action::RunClassification);
            }
            if classifying {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Embedding...").color(palette.text_muted));
                });
            }
            if let ClassificationState::Shown(result) = state.classification() {
                let color = match result.label {
                    TriageLabel::Urgent => palette.alert_red,
                    TriageLabel::General => palette.text_muted,
                };
                ui.add_space(10.0);
                style::result_card(color).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(result.label.tag()).strong().color(color));
                    ui.label(
                        RichText::new(format!("Confidence: {}", result.confidence_display))
                            .small()
                            .color(palette.text_muted),
                    );
                });
            }
        });
    });

    ui.add_space(32.0);
    ui.columns(2, |columns| {
        let [left, right] = columns else {
            return;
        };
        chart_title(left, "03. CONFUSION MATRIX (Accuracy)");
        caption(left, "Where does the AI get confused?");
        charts::confusion_matrix(left, &data.confusion, &style::TEAL, 300.0);
        caption(
            left,
            &format!("Overall accuracy: {:.1}%", data.confusion.accuracy() * 100.0),
        );

        chart_title(right, "04. LATENCY REDUCTION (Human vs AI)");
        caption(right, "Response time per ticket (Minutes).");
        let styles = [
            LineStyle {
                fill: Some(Color32::from_rgba_unmultiplied(255, 255, 255, 26)),
                ..LineStyle::solid(palette.neutral_gray, 2.0)
            },
            LineStyle::solid(palette.accent_cyan, 4.0),
        ];
        charts::line_chart(right, &data.latency, &styles, 300.0);
    });

    architect_note(ui, study);
    actions
}
