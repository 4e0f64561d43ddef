// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Launcher configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{Result, ShellError};

/// Persistent launcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Runtime switches forwarded to native init ahead of command-line ones.
    pub default_parameters: Vec<String>,
    /// App specs started before any given on the command line.
    pub startup_apps: Vec<String>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_parameters: Vec::new(),
            startup_apps: Vec::new(),
            log_filter: "info".into(),
        }
    }
}

impl ShellConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        if config.log_filter.trim().is_empty() {
            return Err(ShellError::Config(format!(
                "{}: log_filter must not be empty",
                path.display()
            )));
        }
        EnvFilter::try_new(&config.log_filter).map_err(|e| {
            ShellError::Config(format!("{}: invalid log_filter: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded shell config");
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
