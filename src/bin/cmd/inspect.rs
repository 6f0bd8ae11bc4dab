// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show filename-derived frame properties.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use robotools::FileFrame;
use serde_json::json;

use crate::common::{format_timestamp, or_dash, Result};

/// Show the properties a file frame derives from its path.
#[derive(Args, Clone, Debug)]
pub struct InspectCmd {
    /// Image or point cloud file (need not exist)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Frame ID to assign
    #[arg(long, default_value_t = 0)]
    id: i64,

    /// Capture time in seconds since the Unix epoch
    #[arg(long)]
    timestamp: Option<f64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        let mut frame = FileFrame::from_path(self.id, &self.input)
            .with_context(|| format!("cannot build frame for {}", self.input.display()))?;
        if let Some(ts) = self.timestamp {
            frame.frame_mut().set_timestamp(ts);
        }

        if self.json {
            let value = json!({
                "frame_id": frame.frame_id(),
                "kind": frame.kind(),
                "filepath": frame.filepath().display().to_string(),
                "filename": frame.filename(),
                "filestem": frame.filestem(),
                "rootpath": frame.rootpath().display().to_string(),
                "extension": frame.extension(),
                "prefix": frame.prefix(),
                "user_notes": frame.user_notes(),
                "timestamp": frame.frame().timestamp(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        println!("=== {} ===", frame.filepath().display());
        println!("Frame ID: {}", frame.frame_id());
        println!("Kind: {}", frame.kind().frame_type());
        println!("Filename: {}", frame.filename());
        println!("Filestem: {}", frame.filestem());
        println!("Rootpath: {}", frame.rootpath().display());
        println!("Extension: {}", or_dash(frame.extension()));
        println!("Prefix: {}", or_dash(frame.prefix()));
        println!("User notes: {}", or_dash(frame.user_notes()));
        if let Some(ts) = frame.frame().timestamp() {
            println!("Timestamp: {}", format_timestamp(ts));
        }

        Ok(())
    }
}
