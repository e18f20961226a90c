//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! What gets collected (root, extensions, exclusions) is intentionally NOT
//! configurable — those are fixed program behaviour.  This type only holds
//! ambient defaults: the output file name and display settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Collection run settings.
    pub collection: CollectionConfig,
    /// Output display settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Name of the bundle written into the root directory.
    pub output_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            collection: CollectionConfig {
                output_file: "all_code.txt".into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// There is no user-facing config file for collection behaviour; this
    /// always returns the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    /// Path to where a configuration file would live.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.codecat.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "codecat", "codecat")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".codecat.toml"))
    }
}
