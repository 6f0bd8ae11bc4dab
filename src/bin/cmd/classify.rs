// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Classify command - map files to frame types by extension.

use std::path::PathBuf;

use clap::Args;
use robotools::io::detection::{extension_from_filepath, frametype_from_filepath};
use serde_json::json;

use crate::common::{or_dash, Result};

/// Classify files by extension.
#[derive(Args, Clone, Debug)]
pub struct ClassifyCmd {
    /// Files to classify (need not exist)
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Print JSON lines instead of a table
    #[arg(long)]
    json: bool,
}

impl ClassifyCmd {
    pub fn run(self) -> Result<()> {
        for path in &self.paths {
            let frame_type = frametype_from_filepath(path);
            let extension = extension_from_filepath(path);
            if self.json {
                println!(
                    "{}",
                    json!({
                        "path": path.display().to_string(),
                        "extension": extension,
                        "frame_type": frame_type,
                    })
                );
            } else {
                println!(
                    "{:<10} {:<6} {}",
                    frame_type.as_str(),
                    or_dash(extension),
                    path.display()
                );
            }
        }
        Ok(())
    }
}
