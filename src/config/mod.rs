// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo application's configuration, including
//! loading and saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.dwell_secs = Some(2.5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod defaults;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Dwell override applied to toasts opened from the demo screen.
    #[serde(default)]
    pub dwell_secs: Option<f32>,
    #[serde(default)]
    pub dark_theme: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dwell_secs: None,
            dark_theme: Some(true),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Dwell time in seconds for an open toast.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the supported range (0–60 seconds).
///
/// # Example
///
/// ```
/// use iced_toast::config::DwellSeconds;
///
/// let dwell = DwellSeconds::new(2.5);
/// assert_eq!(dwell.value(), 2.5);
///
/// // Values outside range are clamped
/// let too_high = DwellSeconds::new(100.0);
/// assert_eq!(too_high.value(), 60.0); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DwellSeconds(f32);

impl DwellSeconds {
    /// Creates a new dwell value, clamping to the valid range.
    /// Non-finite input falls back to the default dwell.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_DWELL_SECS, MAX_DWELL_SECS))
        } else {
            Self(DEFAULT_DWELL_SECS)
        }
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the dwell as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for DwellSeconds {
    fn default() -> Self {
        Self(DEFAULT_DWELL_SECS)
    }
}

impl From<Duration> for DwellSeconds {
    fn from(duration: Duration) -> Self {
        Self::new(duration.as_secs_f32())
    }
}
