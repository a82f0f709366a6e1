//! Dashboard domain: sections, sample data, and the two interactive demos.
//!
//! Nothing here depends on egui; the renderer reads these types and feeds
//! user input back through [`Action`].

pub mod app_state;
pub mod content;
pub mod risk;
pub mod sample_data;
mod section;
pub mod triage;

pub use app_state::{Action, AppState, ClassificationState};
pub use risk::{RiskInputs, RiskScore, RiskStatus, compute_risk};
pub use sample_data::{SampleDataProvider, SectionData};
pub use section::Section;
pub use triage::{ClassificationResult, TriageLabel, classify};
