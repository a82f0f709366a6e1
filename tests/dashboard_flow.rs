mod support;

use std::time::{Duration, Instant};

use folio::{
    app_dirs,
    config::{self, CONFIG_FILE_NAME},
    egui_app::controller::DashboardController,
    portfolio::{Action, Section, SectionData, TriageLabel},
};
use support::folio_env::FolioEnvGuard;
use tempfile::TempDir;

struct Harness {
    _env: FolioEnvGuard,
    temp: TempDir,
}

impl Harness {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let env = FolioEnvGuard::set_config_home(temp.path().to_path_buf());
        Self { _env: env, temp }
    }

    fn write_config(&self, body: &str) {
        let root = self.temp.path().join(app_dirs::APP_DIR_NAME);
        std::fs::create_dir_all(&root).expect("create app root");
        std::fs::write(root.join(CONFIG_FILE_NAME), body).expect("write config");
    }
}

#[test]
fn first_launch_creates_config_in_app_root() {
    let harness = Harness::new();
    let settings = config::load_or_default().expect("load settings");
    assert_eq!(settings.demo.simulated_latency_ms, 500);
    assert!(
        harness
            .temp
            .path()
            .join(app_dirs::APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
            .is_file()
    );
}

#[test]
fn seeded_config_reproduces_revenue_charts() {
    let harness = Harness::new();
    harness.write_config("[data]\nseed = 2025\n[demo]\nsimulated_latency_ms = 0\n");
    let settings = config::load_or_default().expect("load settings");

    let mut first = DashboardController::new(&settings);
    let mut second = DashboardController::new(&settings);
    first.select_section(Section::RevenueAnalysis);
    second.select_section(Section::RevenueAnalysis);
    assert_eq!(first.section_data(), second.section_data());
    let SectionData::Revenue(data) = first.section_data() else {
        panic!("expected revenue data");
    };
    assert_eq!(data.regional.y_labels.last(), Some(&"LatAm"));
}

#[test]
fn triage_walkthrough_with_simulated_latency() {
    let harness = Harness::new();
    harness.write_config("[demo]\nsimulated_latency_ms = 250\n");
    let settings = config::load_or_default().expect("load settings");
    let mut controller = DashboardController::new(&settings);

    let start = Instant::now();
    controller.dispatch(Action::SelectSection(Section::AiTriage), start);
    controller.dispatch(Action::RunClassification, start);
    assert!(controller.is_classifying());
    assert!(controller.state().classification().shown().is_none());

    controller.tick(start + Duration::from_millis(250));
    let shown = controller.state().classification().shown().cloned();
    assert_eq!(shown.map(|r| (r.label, r.confidence_display)), Some((TriageLabel::Urgent, "98.2%")));

    controller.dispatch(Action::EditEmail(String::new()), start);
    controller.dispatch(Action::RunClassification, start);
    controller.tick(start + Duration::from_millis(600));
    let label = controller.state().classification().shown().map(|r| r.label);
    assert_eq!(label, Some(TriageLabel::General));
}

#[test]
fn churn_simulator_covers_all_branches() {
    let _harness = Harness::new();
    let settings = config::load_or_default().expect("load settings");
    let mut controller = DashboardController::new(&settings);
    controller.select_section(Section::ChurnPrediction);

    let cases = [((2, 5), 85, "Critical"), ((5, 5), 40, "Stable"), ((2, 1), 45, "Stable"), ((10, 1), 0, "Stable")];
    for ((logins, tickets), expected, status) in cases {
        controller.set_login_frequency(logins);
        controller.set_support_tickets(tickets);
        let score = controller.state().risk_score();
        assert_eq!(score.value(), expected, "({logins}, {tickets})");
        assert_eq!(score.status().label(), status);
    }
}
