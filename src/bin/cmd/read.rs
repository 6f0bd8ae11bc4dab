// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Read command - decode a frame file and summarize its content.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use robotools::{ColourMode, FileFrame, FrameData, ImageFormat};
use tracing::info;

use crate::common::{resolve_read_options, Result};

/// Decode an image or point cloud file.
#[derive(Args, Clone, Debug)]
pub struct ReadCmd {
    /// Image or point cloud file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Image representation: array or library
    #[arg(short, long)]
    format: Option<ImageFormat>,

    /// Image colour mode: colour, grayscale or auto
    #[arg(short, long)]
    colour: Option<ColourMode>,

    /// TOML config providing read defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl ReadCmd {
    pub fn run(self) -> Result<()> {
        let options = resolve_read_options(self.config.as_deref(), self.format, self.colour)?;
        let frame = FileFrame::from_path(0, &self.input)?;
        let data = frame
            .read(&options)
            .with_context(|| format!("failed to read {}", self.input.display()))?;

        println!("=== {} ===", self.input.display());
        match data {
            FrameData::Image(img) => {
                let (width, height) = img.dimensions();
                println!("Type: image");
                println!("Format: {}", img.format());
                println!("Colour mode: {}", options.colour);
                println!("Size: {width}x{height}");
                println!("Channels: {}", img.channels());
            }
            FrameData::PointCloud(cloud) => {
                println!("Type: pointcloud");
                println!("Points: {}", cloud.len());
                println!("Colors: {}", if cloud.has_colors() { "yes" } else { "no" });
                if let Some((lo, hi)) = cloud.bounds() {
                    println!("Bounds min: [{:.3}, {:.3}, {:.3}]", lo[0], lo[1], lo[2]);
                    println!("Bounds max: [{:.3}, {:.3}, {:.3}]", hi[0], hi[1], hi[2]);
                }
            }
        }
        info!(path = %self.input.display(), "read complete");

        Ok(())
    }
}
