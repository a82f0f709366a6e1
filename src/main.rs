#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the Folio dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use folio::config::{self, AppSettings, ConfigError};
use folio::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use folio::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config::load_or_default();
    let log_settings = loaded
        .as_ref()
        .map(|settings| settings.logging.clone())
        .unwrap_or_default();
    if let Err(err) = logging::init(&log_settings) {
        eprintln!("Logging disabled: {err}");
    }
    if let Err(err) = &loaded {
        tracing::error!("Failed to load config: {err}");
    }

    let start_maximized = loaded
        .as_ref()
        .map(|settings| settings.window.start_maximized)
        .unwrap_or(true);
    let viewport = egui::ViewportBuilder::default()
        .with_title("Sejal | Data Portfolio")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(start_maximized);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        native_options,
        Box::new(move |_cc| Ok(launch(loaded))),
    )?;
    Ok(())
}

fn launch(loaded: Result<AppSettings, ConfigError>) -> Box<dyn eframe::App> {
    match loaded {
        Ok(settings) => Box::new(EguiApp::new(&settings)),
        Err(err) => Box::new(LaunchError {
            message: format!("Failed to load config: {err}"),
        }),
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start dashboard");
                ui.label(&self.message);
            });
        });
    }
}
