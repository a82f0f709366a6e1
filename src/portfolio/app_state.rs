//! Immutable dashboard state and its reducer.
//!
//! Every interaction is an [`Action`]; [`AppState::apply`] consumes the old
//! state and returns the next one. Demo inputs belong to the section that
//! shows them and reset whenever a different section is opened.

use super::risk::{RiskInputs, RiskScore};
use super::triage::{self, ClassificationResult};
use super::Section;

/// Classifier output lifecycle for the triage demo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassificationState {
    #[default]
    Idle,
    /// Result is known but held back while the simulated latency elapses.
    Pending(ClassificationResult),
    Shown(ClassificationResult),
}

impl ClassificationState {
    pub fn shown(&self) -> Option<&ClassificationResult> {
        match self {
            ClassificationState::Shown(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ClassificationState::Pending(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectSection(Section),
    SetLoginFrequency(u8),
    SetSupportTickets(u8),
    EditEmail(String),
    RunClassification,
    RevealClassification,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    section: Section,
    risk: RiskInputs,
    email: String,
    classification: ClassificationState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::opened_at(Section::default())
    }
}

impl AppState {
    /// Fresh state with `section` visible and its demo inputs at defaults.
    pub fn opened_at(section: Section) -> Self {
        Self {
            section,
            risk: RiskInputs::default(),
            email: triage::DEFAULT_EMAIL.to_string(),
            classification: ClassificationState::Idle,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn risk_inputs(&self) -> RiskInputs {
        self.risk
    }

    pub fn risk_score(&self) -> RiskScore {
        self.risk.score()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn classification(&self) -> &ClassificationState {
        &self.classification
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SelectSection(section) if section == self.section => self,
            Action::SelectSection(section) => Self::opened_at(section),
            Action::SetLoginFrequency(value) => Self {
                risk: self.risk.with_login_frequency(value),
                ..self
            },
            Action::SetSupportTickets(value) => Self {
                risk: self.risk.with_support_tickets(value),
                ..self
            },
            Action::EditEmail(email) if email == self.email => self,
            Action::EditEmail(email) => Self {
                email,
                classification: ClassificationState::Idle,
                ..self
            },
            Action::RunClassification => {
                let result = triage::classify(&self.email);
                Self {
                    classification: ClassificationState::Pending(result),
                    ..self
                }
            }
            Action::RevealClassification => match self.classification {
                ClassificationState::Pending(result) => Self {
                    classification: ClassificationState::Shown(result),
                    ..self
                },
                classification => Self {
                    classification,
                    ..self
                },
            },
        }
    }
}
