// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Point cloud decoding.
//!
//! Supports PLY (ASCII and binary, through `ply-rs`) and PCD (through
//! `pcd-rs`). Only positions and optional per-point colour are kept;
//! colours are normalized to `[0, 1]`.
//!
//! # Colour Properties
//!
//! - PLY: `red`, `green`, `blue` vertex properties (8-bit or float)
//! - PCD: a packed `rgb` or `rgba` field

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use pcd_rs::{DynReader, DynRecord, Field};
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::io::detection::extension_from_filepath;
use crate::{FrameError, Result};

/// Decoded point cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<[f64; 3]>,
    /// One entry per point when present
    pub colors: Option<Vec<[f64; 3]>>,
}

impl PointCloud {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(mut lo, mut hi), p| {
            for i in 0..3 {
                lo[i] = lo[i].min(p[i]);
                hi[i] = hi[i].max(p[i]);
            }
            (lo, hi)
        }))
    }
}

/// Read a point cloud from a `.ply` or `.pcd` file.
///
/// # Errors
///
/// Returns [`FrameError::Io`] if the file cannot be opened,
/// [`FrameError::Decode`] if its content is malformed, and
/// [`FrameError::UnsupportedFrameType`] for other extensions.
pub fn read_pointcloud<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
    let path = path.as_ref();
    let cloud = match extension_from_filepath(path).as_deref() {
        Some("ply") => read_ply(path)?,
        Some("pcd") => read_pcd(path)?,
        other => {
            return Err(FrameError::unsupported_frame_type(
                path,
                other.unwrap_or("none"),
            ))
        }
    };
    debug!(
        path = %path.display(),
        points = cloud.len(),
        colors = cloud.has_colors(),
        "decoded point cloud"
    );
    Ok(cloud)
}

// ============================================================================
// PLY
// ============================================================================

fn read_ply(path: &Path) -> Result<PointCloud> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let parser = Parser::<DefaultElement>::new();
    let header = parser
        .read_header(&mut reader)
        .map_err(|e| FrameError::decode("PLY", path, format!("failed to parse header: {e}")))?;
    let payload = parser
        .read_payload(&mut reader, &header)
        .map_err(|e| FrameError::decode("PLY", path, format!("failed to read payload: {e}")))?;

    let Some(vertices) = payload.get("vertex") else {
        return Ok(PointCloud::default());
    };

    let mut points = Vec::with_capacity(vertices.len());
    let mut colors = Vec::with_capacity(vertices.len());
    let mut all_colored = !vertices.is_empty();

    for vertex in vertices {
        let coord = |key: &str| {
            ply_scalar(vertex, key)
                .ok_or_else(|| FrameError::decode("PLY", path, format!("vertex misses '{key}'")))
        };
        points.push([coord("x")?, coord("y")?, coord("z")?]);

        match (
            ply_color(vertex, "red"),
            ply_color(vertex, "green"),
            ply_color(vertex, "blue"),
        ) {
            (Some(r), Some(g), Some(b)) if all_colored => colors.push([r, g, b]),
            _ => all_colored = false,
        }
    }

    Ok(PointCloud {
        points,
        colors: all_colored.then_some(colors),
    })
}

fn ply_scalar(element: &DefaultElement, key: &str) -> Option<f64> {
    match element.get(key)? {
        Property::Char(v) => Some(f64::from(*v)),
        Property::UChar(v) => Some(f64::from(*v)),
        Property::Short(v) => Some(f64::from(*v)),
        Property::UShort(v) => Some(f64::from(*v)),
        Property::Int(v) => Some(f64::from(*v)),
        Property::UInt(v) => Some(f64::from(*v)),
        Property::Float(v) => Some(f64::from(*v)),
        Property::Double(v) => Some(*v),
        _ => None,
    }
}

/// Colour channel in `[0, 1]`; integer channels are 8-bit.
fn ply_color(element: &DefaultElement, key: &str) -> Option<f64> {
    match element.get(key)? {
        Property::Float(v) => Some(f64::from(*v)),
        Property::Double(v) => Some(*v),
        _ => ply_scalar(element, key).map(|v| v / 255.0),
    }
}

// ============================================================================
// PCD
// ============================================================================

fn read_pcd(path: &Path) -> Result<PointCloud> {
    // Surface a missing file as plain I/O rather than a codec failure
    File::open(path)?;

    let reader = DynReader::open(path)
        .map_err(|e| FrameError::decode("PCD", path, format!("failed to open: {e}")))?;

    let fields = &reader.meta().field_defs.fields;
    let field_index = |name: &str| fields.iter().position(|field| field.name == name);
    let (Some(x_idx), Some(y_idx), Some(z_idx)) =
        (field_index("x"), field_index("y"), field_index("z"))
    else {
        return Err(FrameError::decode("PCD", path, "missing one of x, y or z field"));
    };
    let rgb_idx = field_index("rgb").or_else(|| field_index("rgba"));

    let records = reader
        .collect::<std::result::Result<Vec<DynRecord>, _>>()
        .map_err(|e| FrameError::decode("PCD", path, format!("failed to read points: {e}")))?;

    let mut points = Vec::with_capacity(records.len());
    let mut colors = Vec::with_capacity(records.len());

    for record in &records {
        let coord = |idx: usize| record.0.get(idx).and_then(pcd_scalar);
        let (Some(x), Some(y), Some(z)) = (coord(x_idx), coord(y_idx), coord(z_idx)) else {
            return Err(FrameError::decode(
                "PCD",
                path,
                "point coordinate is not a scalar number",
            ));
        };
        points.push([x, y, z]);

        if let Some(idx) = rgb_idx {
            if let Some(color) = record.0.get(idx).and_then(unpack_pcd_rgb) {
                colors.push(color);
            }
        }
    }

    let colors = (rgb_idx.is_some() && colors.len() == points.len() && !points.is_empty())
        .then_some(colors);
    Ok(PointCloud { points, colors })
}

/// First element of a numeric field, widened to `f64`.
fn pcd_scalar(field: &Field) -> Option<f64> {
    Some(match field {
        Field::I8(v) => f64::from(*v.first()?),
        Field::I16(v) => f64::from(*v.first()?),
        Field::I32(v) => f64::from(*v.first()?),
        Field::U8(v) => f64::from(*v.first()?),
        Field::U16(v) => f64::from(*v.first()?),
        Field::U32(v) => f64::from(*v.first()?),
        Field::F32(v) => f64::from(*v.first()?),
        Field::F64(v) => *v.first()?,
    })
}

/// Unpack a PCL style `0x00RRGGBB` colour into `[0, 1]` channels.
fn unpack_pcd_rgb(field: &Field) -> Option<[f64; 3]> {
    let packed = match field {
        Field::F32(v) => v.first()?.to_bits(),
        Field::U32(v) => *v.first()?,
        Field::I32(v) => *v.first()? as u32,
        _ => return None,
    };
    let r = (packed >> 16) & 0xff;
    let g = (packed >> 8) & 0xff;
    let b = packed & 0xff;
    Some([
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_pcd_rgb_u32() {
        let color = unpack_pcd_rgb(&Field::U32(vec![0x00ff_8000])).unwrap();
        assert_eq!(color, [1.0, 128.0 / 255.0, 0.0]);
    }

    #[test]
    fn test_unpack_pcd_rgb_f32_bits() {
        let packed = f32::from_bits(0x0000_00ff);
        let color = unpack_pcd_rgb(&Field::F32(vec![packed])).unwrap();
        assert_eq!(color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unpack_pcd_rgb_rejects_other_types() {
        assert!(unpack_pcd_rgb(&Field::U8(vec![1])).is_none());
    }

    #[test]
    fn test_pcd_scalar_widens() {
        assert_eq!(pcd_scalar(&Field::F32(vec![1.5])), Some(1.5));
        assert_eq!(pcd_scalar(&Field::U8(vec![7])), Some(7.0));
        assert_eq!(pcd_scalar(&Field::F64(vec![])), None);
    }

    #[test]
    fn test_bounds() {
        let cloud = PointCloud {
            points: vec![[1.0, -2.0, 3.0], [-1.0, 5.0, 0.0]],
            colors: None,
        };
        assert_eq!(cloud.bounds(), Some(([-1.0, -2.0, 0.0], [1.0, 5.0, 3.0])));
        assert_eq!(PointCloud::default().bounds(), None);
    }

    #[test]
    fn test_read_unsupported_extension() {
        let err = read_pointcloud("/data/cloud.xyz").unwrap_err();
        assert!(matches!(err, FrameError::UnsupportedFrameType { .. }));
    }

    #[test]
    fn test_read_missing_ply_is_io_error() {
        let err = read_pointcloud("/does/not/exist.ply").unwrap_err();
        assert!(matches!(err, FrameError::Io(_)));
    }
}
