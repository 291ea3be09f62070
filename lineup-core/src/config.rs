//! Global configuration at ~/.config/lineup/config.toml.
//!
//! A missing file means defaults; a malformed file is an error. The day
//! window fields feed `DayWindow::new`, which re-validates them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LineupError, LineupResult};
use crate::grid::DayWindow;

fn default_min_hour() -> u32 {
    12
}

fn default_max_hour() -> u32 {
    36
}

fn default_quantum_minutes() -> u32 {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupConfig {
    /// Path to the lineup dataset file. Defaults to ./data/lineup.json.
    pub data_file: Option<PathBuf>,

    /// Earliest hour-of-day a festival day starts.
    #[serde(default = "default_min_hour")]
    pub min_hour: u32,

    /// End of the day window on the extended 0..=48 scale; above 24 means
    /// the day runs past midnight.
    #[serde(default = "default_max_hour")]
    pub max_hour: u32,

    /// Minutes per timetable row.
    #[serde(default = "default_quantum_minutes")]
    pub quantum_minutes: u32,
}

impl Default for LineupConfig {
    fn default() -> Self {
        LineupConfig {
            data_file: None,
            min_hour: default_min_hour(),
            max_hour: default_max_hour(),
            quantum_minutes: default_quantum_minutes(),
        }
    }
}

impl LineupConfig {
    pub fn config_path() -> LineupResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LineupError::Config("Could not determine config directory".to_string()))?
            .join("lineup");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the user config file, writing a default one on first run.
    pub fn load() -> LineupResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> LineupResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| LineupError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> LineupResult<()> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| LineupError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// The dataset path, falling back to the bundled sample.
    pub fn data_path(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("data/lineup.json"))
    }

    /// Day-window parameters, re-validated through the constructor.
    pub fn day_window(&self) -> LineupResult<DayWindow> {
        DayWindow::new(self.min_hour, self.max_hour, self.quantum_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let config = LineupConfig::load_from(Path::new("/nonexistent/lineup.toml")).unwrap();
        assert_eq!(config.min_hour, 12);
        assert_eq!(config.max_hour, 36);
        assert_eq!(config.quantum_minutes, 15);
        assert_eq!(config.data_path(), PathBuf::from("data/lineup.json"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "quantum_minutes = 30\nmax_hour = 29\n").unwrap();

        let config = LineupConfig::load_from(&path).unwrap();
        assert_eq!(config.min_hour, 12);
        assert_eq!(config.max_hour, 29);
        assert_eq!(config.quantum_minutes, 30);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "min_hour = \"noon\"").unwrap();

        let err = LineupConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, LineupError::Config(_)));
    }

    #[test]
    fn day_window_revalidates_fields() {
        let config = LineupConfig {
            quantum_minutes: 0,
            ..LineupConfig::default()
        };
        assert!(matches!(config.day_window(), Err(LineupError::Config(_))));

        let window = LineupConfig::default().day_window().unwrap();
        assert_eq!(window.row_count(), 96);
    }
}
