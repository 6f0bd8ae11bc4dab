// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Robotools
//!
//! Frame metadata and file utilities for robotics data-collection pipelines.
//!
//! - **Classification** of files into image, point cloud and CSV frames in
//!   [`io::detection`](crate::io::detection)
//! - **Decoding** of images and point clouds in [`io`](crate::io)
//! - **Frames** carrying identity, timestamp, pose and free-form attributes
//!   in [`frame`](crate::frame)
//!
//! ## Example: Filename properties
//!
//! ```rust
//! use robotools::FileFrame;
//!
//! let frame = FileFrame::image(1, "/data/run/frame_left_cam_001.png");
//! assert_eq!(frame.prefix().as_deref(), Some("frame"));
//! assert_eq!(frame.user_notes().as_deref(), Some("left_cam"));
//! assert_eq!(frame.extension().as_deref(), Some("png"));
//! ```
//!
//! ## Example: Attributes and pose
//!
//! ```rust
//! use robotools::{CsvFrame, FrameValue, PoseComponents};
//!
//! let mut csv = CsvFrame::new(
//!     0,
//!     &["Time", "Label"],
//!     vec![FrameValue::from(0.1), FrameValue::from("car")],
//! )?;
//! let frame = csv.frame_mut();
//! assert!(frame.has_field("time"));
//!
//! assert!(frame.set_pose_from_components(&PoseComponents::translation(1.0, 2.0, 3.0)));
//! assert_eq!(frame.pose_components().unwrap()["quat_w"], 1.0);
//! # Ok::<(), robotools::FrameError>(())
//! ```
//!
//! ## Example: Reading an image frame
//!
//! ```rust,no_run
//! use robotools::{ColourMode, FileFrame, ReadOptions};
//!
//! let frame = FileFrame::from_path(3, "camera_003.png")?;
//! let data = frame.read(&ReadOptions::new().with_colour(ColourMode::Auto))?;
//! let image = data.as_image().unwrap();
//! println!("{:?} x {} channels", image.dimensions(), image.channels());
//! # Ok::<(), robotools::FrameError>(())
//! ```

// Core types
pub mod core;

pub use self::core::{FrameError, FrameType, FrameValue, Result, ValueMap};

// Classification and decoding
pub mod io;

pub use io::{ColourMode, DecodedImage, ImageArray, ImageFormat, PointCloud};

// Frame model
pub mod frame;

pub use frame::{
    Attributes, CsvFrame, FileFrame, FileKind, Frame, FrameData, FrameSummary, Pose,
    PoseComponents, ReadOptions,
};

// Configuration
pub mod config;

pub use config::ToolsConfig;
