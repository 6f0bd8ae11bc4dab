// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.
//!
//! Fixtures are generated into a temporary directory so no binary test
//! data is checked in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Write a colour PNG with a gradient that has distinct R, G and B.
pub fn write_colour_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(8, 6, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 200]));
    img.save(&path).unwrap();
    path
}

/// Write an RGB PNG whose three channels are identical everywhere.
pub fn write_gray_content_rgb_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(8, 6, |x, y| {
        let v = (x * 20 + y * 10) as u8;
        Rgb([v, v, v])
    });
    img.save(&path).unwrap();
    path
}

/// Write a native single-channel PNG.
pub fn write_gray_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = GrayImage::from_fn(5, 4, |x, y| Luma([(x * 50 + y) as u8]));
    img.save(&path).unwrap();
    path
}

/// Write an ASCII PLY with three coloured vertices.
pub fn write_colored_ply(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let text = "ply\n\
format ascii 1.0\n\
element vertex 3\n\
property float x\n\
property float y\n\
property float z\n\
property uchar red\n\
property uchar green\n\
property uchar blue\n\
end_header\n\
0 0 0 255 0 0\n\
1 2 3 0 255 0\n\
-1 0.5 2 0 0 255\n";
    std::fs::write(&path, text).unwrap();
    path
}

/// Write an ASCII PLY with positions only.
pub fn write_plain_ply(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let text = "ply\n\
format ascii 1.0\n\
element vertex 2\n\
property float x\n\
property float y\n\
property float z\n\
end_header\n\
1 2 3\n\
4 5 6\n";
    std::fs::write(&path, text).unwrap();
    path
}

/// Write an ASCII PCD with two points and no colour.
pub fn write_pcd(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let text = "# .PCD v0.7 - Point Cloud Data file format\n\
VERSION 0.7\n\
FIELDS x y z\n\
SIZE 4 4 4\n\
TYPE F F F\n\
COUNT 1 1 1\n\
WIDTH 2\n\
HEIGHT 1\n\
VIEWPOINT 0 0 0 1 0 0 0\n\
POINTS 2\n\
DATA ascii\n\
1 2 3\n\
4 5 6\n";
    std::fs::write(&path, text).unwrap();
    path
}

/// Packed `0x00RRGGBB` colours used by [`write_colored_pcd`]: orange, then blue.
pub const PCD_PACKED_COLORS: [u32; 2] = [0x00ff_8000, 0x0000_00ff];

/// Write an ASCII PCD with two points and a packed `rgb` field.
///
/// With `float_packed` the field is declared `TYPE F` and each value is
/// the `f32` sharing the packed bits, as PCL writes it; otherwise it is
/// a plain `TYPE U` integer.
pub fn write_colored_pcd(dir: &Path, name: &str, float_packed: bool) -> PathBuf {
    let path = dir.join(name);
    let (rgb_type, values): (&str, Vec<String>) = if float_packed {
        (
            "F",
            PCD_PACKED_COLORS
                .iter()
                .map(|bits| f32::from_bits(*bits).to_string())
                .collect(),
        )
    } else {
        (
            "U",
            PCD_PACKED_COLORS.iter().map(u32::to_string).collect(),
        )
    };
    let text = format!(
        "# .PCD v0.7 - Point Cloud Data file format\n\
VERSION 0.7\n\
FIELDS x y z rgb\n\
SIZE 4 4 4 4\n\
TYPE F F F {rgb_type}\n\
COUNT 1 1 1 1\n\
WIDTH 2\n\
HEIGHT 1\n\
VIEWPOINT 0 0 0 1 0 0 0\n\
POINTS 2\n\
DATA ascii\n\
1 2 3 {}\n\
-4 5 0.5 {}\n",
        values[0], values[1]
    );
    std::fs::write(&path, text).unwrap();
    path
}
