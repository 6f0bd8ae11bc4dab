// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Frame type detection from file extensions.
//!
//! Frames are classified purely by the extension of their file name,
//! looked up against fixed, case-sensitive tables. Only the final path
//! segment is considered: dots in directory names never contribute.
//!
//! # Supported Types
//!
//! - **Image**: bmp, pbm, pgm, ppm, jpeg, jpg, jpe, jp2, tiff, tif, png
//! - **Point cloud**: ply, pcd
//! - **CSV**: csv
//!
//! # Example
//!
//! ```rust
//! use robotools::io::detection::frametype_from_filepath;
//! use robotools::FrameType;
//!
//! assert_eq!(frametype_from_filepath("/path/to/file/001.png"), FrameType::Image);
//! assert_eq!(frametype_from_filepath("relative/scan.v2/cloud"), FrameType::Unknown);
//! ```

use std::path::Path;

use crate::FrameType;

const IMAGE_TYPES: &[&str] = &[
    "bmp", "pbm", "pgm", "ppm", "jpeg", "jpg", "jpe", "jp2", "tiff", "tif", "png",
];

const POINTCLOUD_TYPES: &[&str] = &["ply", "pcd"];

const CSV_TYPES: &[&str] = &["csv"];

/// Supported image extensions, without the period.
pub fn supported_image_types() -> &'static [&'static str] {
    IMAGE_TYPES
}

/// Supported point cloud extensions, without the period.
pub fn supported_pointcloud_types() -> &'static [&'static str] {
    POINTCLOUD_TYPES
}

/// Supported CSV extensions, without the period.
pub fn supported_csv_types() -> &'static [&'static str] {
    CSV_TYPES
}

/// Name of the final path segment, or an empty string if there is none.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Get the extension of a file, without the period.
///
/// The extension is everything after the last `.` of the file name.
/// Returns `None` when the file name contains no `.` at all.
pub fn extension_from_filepath<P: AsRef<Path>>(path: P) -> Option<String> {
    file_name(path.as_ref())
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_string())
}

/// Classify an extension (without the period).
///
/// Lookup is case-sensitive; `None` and unmatched extensions are
/// [`FrameType::Unknown`].
pub fn frametype_from_extension(extension: Option<&str>) -> FrameType {
    match extension {
        Some(ext) if IMAGE_TYPES.contains(&ext) => FrameType::Image,
        Some(ext) if POINTCLOUD_TYPES.contains(&ext) => FrameType::PointCloud,
        Some(ext) if CSV_TYPES.contains(&ext) => FrameType::CsvData,
        _ => FrameType::Unknown,
    }
}

/// Classify a relative or absolute file path by its extension.
pub fn frametype_from_filepath<P: AsRef<Path>>(path: P) -> FrameType {
    let extension = extension_from_filepath(path);
    frametype_from_extension(extension.as_deref())
}
