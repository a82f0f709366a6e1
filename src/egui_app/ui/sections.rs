//! Per-section layouts. Each renderer reads the model and returns the
//! actions the user triggered this frame.

mod churn;
mod revenue;
mod summary;
mod triage;

use super::style;
use crate::portfolio::{Action, AppState, SectionData, content::CaseStudy, content};
use eframe::egui::{self, Color32, RichText, Ui};

pub(super) fn render_section(
    ui: &mut Ui,
    state: &AppState,
    data: &SectionData,
    classifying: bool,
) -> Vec<Action> {
    match data {
        SectionData::Summary(data) => {
            summary::render(ui, data);
            Vec::new()
        }
        SectionData::Revenue(data) => {
            revenue::render(ui, data);
            Vec::new()
        }
        SectionData::Churn(data) => churn::render(ui, state, data),
        SectionData::Triage(data) => triage::render(ui, state, data, classifying),
    }
}

fn case_study_header(ui: &mut Ui, study: &CaseStudy) {
    let palette = style::palette();
    ui.label(
        RichText::new(study.header)
            .size(38.0)
            .color(palette.text_primary),
    );
    ui.label(RichText::new(study.caption).small().color(palette.text_muted));
    ui.add_space(12.0);
    style::problem_box().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("THE CHALLENGE").strong());
        ui.label(RichText::new(study.challenge).size(16.0));
    });
    ui.add_space(24.0);
}

fn architect_note(ui: &mut Ui, study: &CaseStudy) {
    let palette = style::palette();
    ui.add_space(16.0);
    ui.separator();
    ui.label(RichText::new(content::NOTE_HEADING).size(15.0).strong());
    ui.add_space(6.0);
    info_card(ui, None, study.note, palette.accent_cyan);
}

/// Tinted callout with an optional bold title.
fn info_card(ui: &mut Ui, title: Option<&str>, body: &str, tint: Color32) {
    egui::Frame::new()
        .fill(tint.gamma_multiply(0.12))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(title) = title {
                ui.label(RichText::new(title).strong().color(tint));
                ui.add_space(6.0);
            }
            ui.label(body);
        });
}

fn chart_title(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).strong());
}

fn caption(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().color(style::palette().text_muted));
}

fn metric_card(ui: &mut Ui, label: &str, value: &str, delta: &str, delta_color: Color32) {
    let palette = style::palette();
    style::glass_card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(label).color(palette.text_muted));
        ui.label(RichText::new(value).size(32.0).color(palette.text_primary));
        ui.label(RichText::new(format!("↑ {delta}")).small().color(delta_color));
    });
}
