//! Date-picker settings persistence
//!
//! Stores user preferences in `~/.config/almanac/config.yaml`

use serde::{Deserialize, Serialize};

/// Date-picker settings that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatePickerSettings {
    /// Pattern for inserted dates (tokens: YYYY, YY, MMM, MM, M, DD, D)
    #[serde(default = "default_format")]
    pub format: String,
    /// First day of the calendar week (0 = Sunday .. 6 = Saturday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,
    /// Whether committed dates include a time component.
    /// Reserved: persisted and surfaced, but not consumed by formatting yet.
    #[serde(default)]
    pub include_time: bool,
    /// Pattern for the time component. Reserved, see `include_time`.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Whether committed dates are wrapped as trackable styled tokens
    /// instead of plain text
    #[serde(default = "default_use_styled_dates")]
    pub use_styled_dates: bool,
}

fn default_format() -> String {
    "YYYY-MM-DD".to_string()
}

fn default_first_day_of_week() -> u8 {
    1
}

fn default_time_format() -> String {
    "HH:mm".to_string()
}

fn default_use_styled_dates() -> bool {
    true
}

impl Default for DatePickerSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
            first_day_of_week: default_first_day_of_week(),
            include_time: false,
            time_format: default_time_format(),
            use_styled_dates: default_use_styled_dates(),
        }
    }
}

impl DatePickerSettings {
    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {}", path.display());
                    settings.validated()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings to {}: {}", path.display(), e))?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Enforce the `first_day_of_week` invariant (0..=6).
    ///
    /// A hand-edited config file may carry any number; out-of-range values
    /// fall back to the default rather than corrupting grid math.
    pub fn validated(mut self) -> Self {
        if self.first_day_of_week > 6 {
            tracing::warn!(
                "first_day_of_week {} out of range 0..=6, using default",
                self.first_day_of_week
            );
            self.first_day_of_week = default_first_day_of_week();
        }
        self
    }
}
