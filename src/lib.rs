//! Library exports for the dashboard binary, tests, and benches.
/// Application directory resolution.
pub mod app_dirs;
/// Launch-time settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Sections, sample data, and the interactive demos.
pub mod portfolio;
