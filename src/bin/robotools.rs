// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Robotools CLI
//!
//! Command-line access to frame classification, filename properties,
//! decoding and pose conversion.
//!
//! ## Usage
//!
//! ```sh
//! # Classify files by extension
//! robotools classify frame_001.png cloud_001.pcd log.csv
//!
//! # Show filename-derived frame properties
//! robotools inspect /data/run/frame_left_cam_001.png --id 1
//!
//! # Decode a file and summarize it
//! robotools read frame_001.png --format array --colour auto
//!
//! # Build a pose from components
//! robotools pose --pos-x 1 --pos-y 2 --pos-z 3
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ClassifyCmd, InspectCmd, PoseCmd, ReadCmd};
use common::Result;

/// Robotools - frame utilities for robotics data collection
///
/// Classify, inspect and decode the image, point cloud and CSV files
/// produced by data-collection runs.
#[derive(Parser, Clone)]
#[command(name = "robotools")]
#[command(about = "Frame utilities for robotics data collection", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Classify files as image, point cloud, CSV or unknown
    Classify(ClassifyCmd),

    /// Show filename-derived frame properties
    Inspect(InspectCmd),

    /// Decode an image or point cloud and summarize it
    Read(ReadCmd),

    /// Build a pose from components and print its component map
    Pose(PoseCmd),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Classify(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Read(cmd) => cmd.run(),
        Commands::Pose(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
