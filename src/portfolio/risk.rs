//! Churn risk simulator.
//!
//! Two additive usage rules feed a capped score. With the slider ranges below
//! the largest reachable score is 85, so the 99 cap never engages; it is kept
//! so the rule matches the published model card.

use std::ops::RangeInclusive;

/// Allowed logins-per-week values.
pub const LOGIN_FREQUENCY_RANGE: RangeInclusive<u8> = 0..=20;
/// Allowed open support ticket counts.
pub const SUPPORT_TICKETS_RANGE: RangeInclusive<u8> = 0..=10;

const LOW_LOGIN_THRESHOLD: u8 = 3;
const HIGH_TICKET_THRESHOLD: u8 = 3;
const LOW_LOGIN_WEIGHT: u8 = 45;
const HIGH_TICKET_WEIGHT: u8 = 40;
const SCORE_CAP: u8 = 99;
const CRITICAL_ABOVE: u8 = 70;

/// Slider values for the simulator, always within their ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskInputs {
    login_frequency: u8,
    support_tickets: u8,
}

impl RiskInputs {
    /// Build inputs, clamping each value into its slider range.
    pub fn new(login_frequency: u8, support_tickets: u8) -> Self {
        Self {
            login_frequency: clamp_to(login_frequency, &LOGIN_FREQUENCY_RANGE),
            support_tickets: clamp_to(support_tickets, &SUPPORT_TICKETS_RANGE),
        }
    }

    pub fn login_frequency(&self) -> u8 {
        self.login_frequency
    }

    pub fn support_tickets(&self) -> u8 {
        self.support_tickets
    }

    pub fn with_login_frequency(self, login_frequency: u8) -> Self {
        Self::new(login_frequency, self.support_tickets)
    }

    pub fn with_support_tickets(self, support_tickets: u8) -> Self {
        Self::new(self.login_frequency, support_tickets)
    }

    pub fn score(&self) -> RiskScore {
        compute_risk(self.login_frequency, self.support_tickets)
    }
}

impl Default for RiskInputs {
    fn default() -> Self {
        Self::new(2, 5)
    }
}

/// Churn probability shown as a percentage, in `0..=99`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RiskScore(u8);

impl RiskScore {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn status(self) -> RiskStatus {
        if self.0 > CRITICAL_ABOVE {
            RiskStatus::Critical
        } else {
            RiskStatus::Stable
        }
    }

    /// Metric text, e.g. `85%`.
    pub fn percent_label(self) -> String {
        format!("{}%", self.0)
    }
}

/// Delta label displayed under the churn metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskStatus {
    Critical,
    Stable,
}

impl RiskStatus {
    pub fn label(self) -> &'static str {
        match self {
            RiskStatus::Critical => "Critical",
            RiskStatus::Stable => "Stable",
        }
    }
}

/// Score a customer's churn risk from weekly logins and open tickets.
pub fn compute_risk(login_frequency: u8, support_tickets: u8) -> RiskScore {
    let mut risk: u8 = 0;
    if login_frequency < LOW_LOGIN_THRESHOLD {
        risk += LOW_LOGIN_WEIGHT;
    }
    if support_tickets > HIGH_TICKET_THRESHOLD {
        risk += HIGH_TICKET_WEIGHT;
    }
    RiskScore(risk.min(SCORE_CAP))
}

fn clamp_to(value: u8, range: &RangeInclusive<u8>) -> u8 {
    value.clamp(*range.start(), *range.end())
}
