// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! TOML configuration.
//!
//! ```toml
//! [read]
//! image_format = "library"
//! colour = "auto"
//! ```
//!
//! Every key is optional and falls back to [`ReadOptions::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::frame::ReadOptions;
use crate::{FrameError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Defaults for decoding frame files
    pub read: ReadOptions,
}

impl ToolsConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FrameError::config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| FrameError::config(e.to_string()))
    }
}
