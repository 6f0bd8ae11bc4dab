// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout robotools.
//!
//! This module provides the foundational types for the library:
//! - [`FrameError`] - Error handling
//! - [`FrameValue`] - Unified attribute value representation
//! - [`FrameType`] - Semantic category of a frame's backing file

pub mod error;
pub mod value;

use serde::{Deserialize, Serialize};

pub use error::{FrameError, Result};
pub use value::{FrameValue, ValueMap};

/// Semantic category of a frame, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    /// Raster image (bmp, png, jpg, ...)
    Image,
    /// Point cloud (ply, pcd)
    PointCloud,
    /// Tabular CSV data
    CsvData,
    /// Anything else, including files without an extension
    Unknown,
}

/// Error returned when parsing a `FrameType` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFrameTypeError {
    _private: (),
}

impl std::fmt::Display for ParseFrameTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid frame type, expected 'image', 'pointcloud', 'csv', or 'unknown'"
        )
    }
}

impl std::error::Error for ParseFrameTypeError {}

impl std::str::FromStr for FrameType {
    type Err = ParseFrameTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(FrameType::Image),
            "pointcloud" | "point_cloud" => Ok(FrameType::PointCloud),
            "csv" | "csvdata" => Ok(FrameType::CsvData),
            "unknown" => Ok(FrameType::Unknown),
            _ => Err(ParseFrameTypeError { _private: () }),
        }
    }
}

impl FrameType {
    /// Check if frames of this type are backed by a decodable file.
    pub fn is_file_backed(&self) -> bool {
        matches!(self, FrameType::Image | FrameType::PointCloud)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameType::Image => "image",
            FrameType::PointCloud => "pointcloud",
            FrameType::CsvData => "csv",
            FrameType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_type_round_trip_names() {
        for ty in [
            FrameType::Image,
            FrameType::PointCloud,
            FrameType::CsvData,
            FrameType::Unknown,
        ] {
            assert_eq!(ty.as_str().parse::<FrameType>().unwrap(), ty);
        }
        assert!("mesh".parse::<FrameType>().is_err());
    }

    #[test]
    fn test_is_file_backed() {
        assert!(FrameType::Image.is_file_backed());
        assert!(FrameType::PointCloud.is_file_backed());
        assert!(!FrameType::CsvData.is_file_backed());
        assert!(!FrameType::Unknown.is_file_backed());
    }
}
