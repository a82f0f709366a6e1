//! View-only state that sits beside the dashboard model.

use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
    pub tone: StatusTone,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::new("Pick a case study from the sidebar", "Idle", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, badge: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: badge.into(),
            badge_color: style::status_badge_color(tone),
            tone,
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}
