//! Bridges the immutable dashboard model to the egui renderer.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::AppSettings;
use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::portfolio::{
    Action, AppState, ClassificationState, SampleDataProvider, Section, SectionData, TriageLabel,
};

/// Owns the current [`AppState`] plus the data drawn for the open section.
pub struct DashboardController {
    pub ui: UiState,
    state: AppState,
    provider: SampleDataProvider,
    data: SectionData,
    simulated_latency: Duration,
    reveal_at: Option<Instant>,
}

impl DashboardController {
    pub fn new(settings: &AppSettings) -> Self {
        let provider = SampleDataProvider::new(settings.data.seed);
        let state = AppState::default();
        let data = provider.generate_series(state.section());
        info!(
            seed = ?provider.seed(),
            latency_ms = settings.demo.simulated_latency_ms,
            "Dashboard ready"
        );
        Self {
            ui: UiState::default(),
            state,
            provider,
            data,
            simulated_latency: settings.simulated_latency(),
            reveal_at: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn section(&self) -> Section {
        self.state.section()
    }

    pub fn section_data(&self) -> &SectionData {
        &self.data
    }

    pub fn select_section(&mut self, section: Section) {
        self.dispatch(Action::SelectSection(section), Instant::now());
    }

    pub fn set_login_frequency(&mut self, value: u8) {
        self.dispatch(Action::SetLoginFrequency(value), Instant::now());
    }

    pub fn set_support_tickets(&mut self, value: u8) {
        self.dispatch(Action::SetSupportTickets(value), Instant::now());
    }

    pub fn edit_email(&mut self, text: String) {
        self.dispatch(Action::EditEmail(text), Instant::now());
    }

    pub fn run_classification(&mut self) {
        self.dispatch(Action::RunClassification, Instant::now());
    }

    /// Apply `action` as if it happened at `now`.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let previous_section = self.state.section();
        let run = matches!(action, Action::RunClassification);
        debug!(?action, "Dispatch");
        self.state = std::mem::take(&mut self.state).apply(action);

        if self.state.section() != previous_section {
            self.reveal_at = None;
            self.data = self.provider.generate_series(self.state.section());
            info!(section = self.state.section().slug(), "Section opened");
            self.show_viewing_status();
        }

        if run {
            self.begin_reveal(now);
        } else if !self.state.classification().is_pending() && self.reveal_at.take().is_some() {
            debug!("Pending classification discarded");
            self.show_viewing_status();
        }
    }

    fn show_viewing_status(&mut self) {
        self.set_status(
            format!("Viewing {}", self.state.section().nav_label()),
            "Ready",
            StatusTone::Info,
        );
    }

    fn begin_reveal(&mut self, now: Instant) {
        if self.simulated_latency.is_zero() {
            self.reveal();
            return;
        }
        self.reveal_at = Some(now + self.simulated_latency);
        self.set_status("Embedding...", "Busy", StatusTone::Busy);
    }

    /// Advance the simulated latency; returns the time left while a result is held back.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let deadline = self.reveal_at?;
        if now >= deadline {
            self.reveal();
            return None;
        }
        Some(deadline - now)
    }

    fn reveal(&mut self) {
        self.reveal_at = None;
        self.state = std::mem::take(&mut self.state).apply(Action::RevealClassification);
        if let ClassificationState::Shown(result) = self.state.classification() {
            info!(label = ?result.label, "Classification shown");
            let tone = match result.label {
                TriageLabel::Urgent => StatusTone::Warning,
                TriageLabel::General => StatusTone::Info,
            };
            let text = format!("Routed as {}", result.label.tag());
            self.set_status(text, "Triage", tone);
        }
    }

    pub fn is_classifying(&self) -> bool {
        self.reveal_at.is_some()
    }

    fn set_status(&mut self, text: impl Into<String>, badge: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, badge, tone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataSettings, DemoSettings};

    fn settings(latency_ms: u64, seed: Option<u64>) -> AppSettings {
        AppSettings {
            demo: DemoSettings {
                simulated_latency_ms: latency_ms,
            },
            data: DataSettings { seed },
            ..AppSettings::default()
        }
    }

    #[test]
    fn opens_on_summary() {
        let controller = DashboardController::new(&settings(0, Some(1)));
        assert_eq!(controller.section(), Section::Summary);
        assert_eq!(controller.section_data().section(), Section::Summary);
        assert_eq!(controller.ui.status, StatusBarState::idle());
    }

    #[test]
    fn section_change_swaps_data() {
        let mut controller = DashboardController::new(&settings(0, Some(1)));
        for section in Section::ALL {
            controller.select_section(section);
            assert_eq!(controller.section_data().section(), section);
        }
        assert_eq!(controller.ui.status.tone, StatusTone::Info);
    }

    #[test]
    fn reselecting_keeps_generated_data() {
        let mut controller = DashboardController::new(&settings(0, None));
        controller.select_section(Section::RevenueAnalysis);
        let before = controller.section_data().clone();
        controller.select_section(Section::RevenueAnalysis);
        assert_eq!(controller.section_data(), &before);
    }

    #[test]
    fn zero_latency_shows_result_immediately() {
        let mut controller = DashboardController::new(&settings(0, None));
        controller.select_section(Section::AiTriage);
        controller.run_classification();
        assert!(!controller.is_classifying());
        let label = controller.state().classification().shown().map(|r| r.label);
        assert_eq!(label, Some(TriageLabel::Urgent));
        assert_eq!(controller.ui.status.tone, StatusTone::Warning);
    }

    #[test]
    fn latency_holds_result_until_deadline() {
        let mut controller = DashboardController::new(&settings(500, None));
        let start = Instant::now();
        controller.dispatch(Action::SelectSection(Section::AiTriage), start);
        controller.dispatch(Action::EditEmail("Roadmap question".into()), start);
        controller.dispatch(Action::RunClassification, start);
        assert!(controller.is_classifying());
        assert_eq!(controller.ui.status.tone, StatusTone::Busy);

        let remaining = controller.tick(start + Duration::from_millis(200));
        assert_eq!(remaining, Some(Duration::from_millis(300)));
        assert!(controller.state().classification().is_pending());

        assert_eq!(controller.tick(start + Duration::from_millis(500)), None);
        let label = controller.state().classification().shown().map(|r| r.label);
        assert_eq!(label, Some(TriageLabel::General));
        assert_eq!(controller.tick(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn leaving_section_cancels_pending_reveal() {
        let mut controller = DashboardController::new(&settings(500, None));
        let start = Instant::now();
        controller.dispatch(Action::SelectSection(Section::AiTriage), start);
        controller.dispatch(Action::RunClassification, start);
        controller.dispatch(Action::SelectSection(Section::Summary), start);
        assert!(!controller.is_classifying());
        assert_eq!(controller.tick(start + Duration::from_secs(1)), None);
        assert_eq!(controller.state().classification(), &ClassificationState::Idle);
    }

    #[test]
    fn editing_during_latency_clears_busy_status() {
        let mut controller = DashboardController::new(&settings(500, None));
        let start = Instant::now();
        controller.dispatch(Action::SelectSection(Section::AiTriage), start);
        controller.dispatch(Action::RunClassification, start);
        assert_eq!(controller.ui.status.tone, StatusTone::Busy);

        controller.dispatch(Action::EditEmail("hello there".into()), start);
        assert!(!controller.is_classifying());
        assert_eq!(controller.state().classification(), &ClassificationState::Idle);
        assert_eq!(controller.ui.status.tone, StatusTone::Info);
        assert_eq!(controller.ui.status.badge_label, "Ready");
        assert_eq!(controller.tick(start + Duration::from_secs(1)), None);
        assert_eq!(controller.state().classification(), &ClassificationState::Idle);
    }

    #[test]
    fn sliders_flow_through_to_score() {
        let mut controller = DashboardController::new(&settings(0, None));
        controller.select_section(Section::ChurnPrediction);
        assert_eq!(controller.state().risk_score().value(), 85);
        controller.set_login_frequency(9);
        controller.set_support_tickets(2);
        assert_eq!(controller.state().risk_score().value(), 0);
    }
}
