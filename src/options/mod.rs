//! Tunable spring and gesture settings with TOML preset support.
//!
//! The thresholds are empirical tuning values, not protocol constants, so
//! they live here rather than in the recognizer. Options serialize to and
//! from TOML; every section uses `#[serde(default)]` so a preset only
//! needs the keys it overrides.

mod gesture;
mod spring;

use std::path::Path;

pub use gesture::GestureOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use spring::SpringOptions;

use crate::error::FeedFrameError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Spring parameters.
    pub spring: SpringOptions,
    /// Gesture thresholds.
    pub gesture: GestureOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FeedFrameError> {
        let content =
            std::fs::read_to_string(path).map_err(FeedFrameError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| FeedFrameError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FeedFrameError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FeedFrameError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FeedFrameError::Io)?;
        }
        std::fs::write(path, content).map_err(FeedFrameError::Io)?;
        log::info!("Saved options to '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), FeedFrameError> {
        let spring = &self.spring;
        for (name, value) in [
            ("spring.damping", spring.damping),
            ("spring.stiffness", spring.stiffness),
            ("spring.mass", spring.mass),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(FeedFrameError::InvalidOptions(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let gesture = &self.gesture;
        for (name, value) in [
            ("spring.rest_displacement", spring.rest_displacement),
            ("spring.rest_speed", spring.rest_speed),
            ("gesture.claim_dead_zone", gesture.claim_dead_zone),
            ("gesture.commit_fraction", gesture.commit_fraction),
            ("gesture.commit_velocity", gesture.commit_velocity),
            ("gesture.tap_distance", gesture.tap_distance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FeedFrameError::InvalidOptions(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
