//
// Copyright (c) 2025 Nathan Fiedler
//

//! Ambient CLI configuration. Loaded from an optional `./cdc-delta.toml`,
//! layered over built-in defaults.
//!
//! This does **not** configure the chunking constants ([`crate::boundary::MIN_SIZE`]
//! and friends) - those are wire-level and fixed, not a deployment knob. What
//! lives here is strictly about how the CLI presents its results.

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// `log` level name: "off", "error", "warn", "info", "debug", "trace".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether the CLI prints the raw bytes of `Add` payloads, or just
    /// their length.
    #[serde(default)]
    pub show_add_payload: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            show_add_payload: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Loads settings from `./cdc-delta.toml` if present, falling back to
    /// [`Settings::default`] when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("log_level", default_log_level())?
            .set_default("show_add_payload", false)?
            .add_source(File::new("cdc-delta", FileFormat::Toml).required(false))
            .build()?;
        builder.try_deserialize()
    }
}
