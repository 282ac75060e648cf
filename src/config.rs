// src/config.rs

//! Defines the configuration structures for the screen geometry adapter.
//!
//! The configuration describes the display used when no host has been
//! installed explicitly (headless tools, previews, tests that go through the
//! process-wide adapter). It is deserialized from JSON; every field has a
//! default so a partial file is enough.

use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Environment variable naming a JSON config file to load at startup.
pub const CONFIG_PATH_ENV: &str = "SCREEN_GEOMETRY_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Root of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Metrics of the fallback display.
    pub display: DisplayConfig,
}

impl Config {
    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Config =
            serde_json::from_str(json).context("Failed to parse geometry config JSON")?;
        config.display.validate()?;
        Ok(config)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read geometry config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid geometry config {}", path.display()))
    }

    /// Loads the file named by `SCREEN_GEOMETRY_CONFIG`, or the defaults when
    /// the variable is unset or the file is unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_PATH_ENV) else {
            return Config::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded geometry config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{:#}. Falling back to default geometry config.", e);
                Config::default()
            }
        }
    }
}

// --- Display Configuration ---

/// Metrics of a display, in logical points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Logical screen width in points.
    pub width_pt: f64,
    /// Logical screen height in points.
    pub height_pt: f64,
    /// Physical pixels per point (1, 2 or 3 on real hardware).
    pub pixel_scale: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        // The reference device the layout constants are authored against.
        DisplayConfig {
            width_pt: 414.0,
            height_pt: 736.0,
            pixel_scale: 3.0,
        }
    }
}

impl DisplayConfig {
    /// Rejects metrics that are NaN, infinite, or not strictly positive.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (field, value) in [
            ("width_pt", self.width_pt),
            ("height_pt", self.height_pt),
            ("pixel_scale", self.pixel_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidDisplayMetric { field, value });
            }
        }
        Ok(())
    }
}
