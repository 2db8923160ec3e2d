//! Config file and setting resolution.
//!
//! Precedence: command-line flag, then config file, then built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use boxcut_layout::{RoleAssignment, DEFAULT_FLAP_LENGTH, DEFAULT_THICKNESS};
use serde::{Deserialize, Serialize};

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "box.svg";

/// Contents of a `boxcut.toml` file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxcutConfig {
    /// Material thickness, e.g. `"3mm"`.
    pub thickness: String,
    /// Closure flap length, e.g. `"15mm"`.
    pub flap_length: String,
    /// Output path.
    pub output: PathBuf,
    /// Assign roles by magnitude instead of entry order.
    pub sort: bool,
}

impl Default for BoxcutConfig {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS.to_string(),
            flap_length: DEFAULT_FLAP_LENGTH.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sort: false,
        }
    }
}

impl BoxcutConfig {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Parse config text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Role policy selected by this config.
    pub fn roles(&self) -> RoleAssignment {
        if self.sort {
            RoleAssignment::ByMagnitude
        } else {
            RoleAssignment::AsEntered
        }
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(
        mut self,
        thickness: Option<String>,
        flap_length: Option<String>,
        output: Option<PathBuf>,
        sort: bool,
    ) -> Self {
        if let Some(t) = thickness {
            self.thickness = t;
        }
        if let Some(f) = flap_length {
            self.flap_length = f;
        }
        if let Some(o) = output {
            self.output = o;
        }
        self.sort |= sort;
        self
    }
}

/// Append `.svg` unless the name already ends in a supported extension.
pub fn with_output_extension(name: &str) -> PathBuf {
    let lower = name.to_lowercase();
    if lower.ends_with(".svg") || lower.ends_with(".dxf") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.svg"))
    }
}
