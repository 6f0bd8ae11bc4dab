// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer for frame files.
//!
//! This module classifies files by extension and decodes image and point
//! cloud files through their codec crates.

pub mod detection;
pub mod image;
pub mod pointcloud;

// Re-exports
pub use detection::{
    extension_from_filepath, frametype_from_extension, frametype_from_filepath,
    supported_csv_types, supported_image_types, supported_pointcloud_types,
};
pub use self::image::{
    read_image, read_image_with_code, ColourMode, DecodedImage, ImageArray, ImageFormat,
};
pub use pointcloud::{read_pointcloud, PointCloud};
