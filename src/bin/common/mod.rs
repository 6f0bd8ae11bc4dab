// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

use anyhow::Context as _;
use robotools::{ColourMode, ImageFormat, ReadOptions, ToolsConfig};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Format a capture time in seconds since the Unix epoch.
pub fn format_timestamp(secs: f64) -> String {
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    match chrono::DateTime::<chrono::Utc>::from_timestamp(whole as i64, nanos) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string(),
        None => format!("{secs} s"),
    }
}

/// Resolve read options: config file first, then explicit flags.
pub fn resolve_read_options(
    config: Option<&Path>,
    format: Option<ImageFormat>,
    colour: Option<ColourMode>,
) -> Result<ReadOptions> {
    let mut options = match config {
        Some(path) => {
            ToolsConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
                .read
        }
        None => ReadOptions::default(),
    };
    if let Some(format) = format {
        options.image_format = format;
    }
    if let Some(colour) = colour {
        options.colour = colour;
    }
    Ok(options)
}

/// Print `-` for absent values.
pub fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
