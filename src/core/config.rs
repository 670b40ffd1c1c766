// src/core/config.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Crate-wide settings, loaded from `mlbox.toml` in the working directory when
/// present, defaults otherwise. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub model: ModelSettings,
    pub defaults: CapabilityDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Suppress the community statement and other banner output.
    pub quiet: bool,
    /// Allow ANSI color in rendered output.
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Directory for downloaded model files.
    pub cache_dir: PathBuf,
    /// Timeout for fetching a model over HTTP, in seconds.
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityDefaults {
    /// Default number of ranked labels returned by classify().
    pub top_k: usize,
    /// Default neighbor count for the kNN classifier.
    pub k_neighbors: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            quiet: false,
            color: true,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(".mlbox/models"),
            request_timeout_secs: 30,
        }
    }
}

impl Default for CapabilityDefaults {
    fn default() -> Self {
        Self {
            top_k: 3,
            k_neighbors: 3,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputSettings::default(),
            model: ModelSettings::default(),
            defaults: CapabilityDefaults::default(),
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "mlbox.toml";

    /// Load settings from `mlbox.toml` if it exists and parses; any problem
    /// falls back to defaults so a broken config never blocks the library.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(text) => toml::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let s = Settings::default();
        assert!(!s.output.quiet);
        assert_eq!(s.defaults.top_k, 3);
        assert_eq!(s.defaults.k_neighbors, 3);
        assert_eq!(s.model.request_timeout_secs, 30);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let s: Settings = toml::from_str("[output]\nquiet = true\ncolor = false\n").unwrap();
        assert!(s.output.quiet);
        assert!(!s.output.color);
        assert_eq!(s.defaults.top_k, 3);
        assert_eq!(s.defaults.k_neighbors, 3);
    }
}
