//! User settings stored as `config.toml` in the app root.
//!
//! Only launch-time options live here. Section choice and demo inputs are
//! never written back.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Upper bound for the cosmetic classifier delay.
pub const MAX_SIMULATED_LATENCY_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub demo: DemoSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Options for the interactive demos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Display-only pause before a classification result appears. 0 disables it.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

/// Sample data generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Fixed RNG seed for chart data; fresh entropy per launch when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_true")]
    pub start_maximized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            start_maximized: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log files kept in the logs folder.
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

impl AppSettings {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.demo.simulated_latency_ms)
    }

    fn normalized(mut self) -> Self {
        self.demo.simulated_latency_ms = self.demo.simulated_latency_ms.min(MAX_SIMULATED_LATENCY_MS);
        self.logging.max_files = self.logging.max_files.max(1);
        if self.logging.level.trim().is_empty() {
            self.logging.level = default_log_level();
        }
        self
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No suitable config directory found: {0}")]
    Dir(#[from] app_dirs::AppDirError),
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Resolve the configuration file path inside the app root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings, writing a default file on first launch.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from(&path);
    }
    let settings = AppSettings::default();
    save_to_path(&settings, &path)?;
    Ok(settings)
}

pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Write settings, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn default_true() -> bool {
    true
}

fn default_simulated_latency_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn with_config_home<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
        let _guard = crate::app_dirs::ConfigBaseGuard::set(dir.to_path_buf());
        f()
    }

    #[test]
    fn first_launch_writes_defaults() {
        let dir = tempdir().unwrap();
        with_config_home(dir.path(), || {
            let settings = load_or_default().unwrap();
            assert_eq!(settings, AppSettings::default());
            let path = dir.path().join(app_dirs::APP_DIR_NAME).join(CONFIG_FILE_NAME);
            assert!(path.is_file());
            assert_eq!(load_from(&path).unwrap(), settings);
        });
    }

    #[test]
    fn seed_and_latency_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        let settings = AppSettings {
            demo: DemoSettings {
                simulated_latency_ms: 0,
            },
            data: DataSettings { seed: Some(42) },
            ..AppSettings::default()
        };
        save_to_path(&settings, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.data.seed, Some(42));
        assert_eq!(loaded.simulated_latency(), Duration::ZERO);
    }

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[data]\nseed = 9\n").unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.data.seed, Some(9));
        assert_eq!(loaded.demo, DemoSettings::default());
        assert!(loaded.window.start_maximized);
        assert_eq!(loaded.logging.max_files, 10);
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(
            &path,
            "[demo]\nsimulated_latency_ms = 60000\n[logging]\nlevel = \"\"\nmax_files = 0\n",
        )
        .unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.demo.simulated_latency_ms, MAX_SIMULATED_LATENCY_MS);
        assert_eq!(loaded.logging.max_files, 1);
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn malformed_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[demo\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("cfg.toml"));
    }
}
