// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pose command - normalize pose components through a frame.

use clap::Args;
use robotools::{Frame, PoseComponents};

use crate::common::Result;

/// Build a pose from translation and/or quaternion components.
///
/// Accepted subsets: all seven, translation only, or rotation only.
#[derive(Args, Clone, Debug)]
pub struct PoseCmd {
    #[arg(long, allow_negative_numbers = true)]
    pos_x: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pos_y: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pos_z: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    quat_w: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    quat_x: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    quat_y: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    quat_z: Option<f64>,
}

impl PoseCmd {
    pub fn run(self) -> Result<()> {
        let components = PoseComponents {
            pos_x: self.pos_x,
            pos_y: self.pos_y,
            pos_z: self.pos_z,
            quat_w: self.quat_w,
            quat_x: self.quat_x,
            quat_y: self.quat_y,
            quat_z: self.quat_z,
        };

        let mut frame = Frame::new(0);
        if !frame.set_pose_from_components(&components) {
            anyhow::bail!(
                "pose needs all of pos_x/pos_y/pos_z, all of quat_w/quat_x/quat_y/quat_z, or both"
            );
        }
        let map = frame.pose_components().unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&map)?);
        Ok(())
    }
}
