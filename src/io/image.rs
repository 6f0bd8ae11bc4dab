// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Image decoding.
//!
//! Images are decoded with the `image` crate and returned in one of two
//! representations:
//!
//! - [`ImageFormat::Array`] - a plain interleaved `u8` raster
//!   ([`ImageArray`]) with either 3 (RGB) or 1 (gray) channels
//! - [`ImageFormat::Library`] - the codec's own [`DynamicImage`], in
//!   whatever color type the file natively decodes to
//!
//! The colour mode either forces colour, forces grayscale, or lets the
//! decoder decide. Auto detection differs between the representations:
//! the array path decodes in colour and collapses to one channel when
//! every pixel has identical R, G and B; the library path keeps the
//! codec's native color type untouched.

use std::path::Path;

use image::{ColorType, DynamicImage, ImageError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FrameError, Result};

/// Representation of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Interleaved `u8` array
    #[default]
    Array,
    /// Codec image object
    Library,
}

impl ImageFormat {
    /// Numeric code of this representation.
    pub fn code(&self) -> i32 {
        match self {
            ImageFormat::Array => 0,
            ImageFormat::Library => 1,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Array => "array",
            ImageFormat::Library => "library",
        }
    }
}

impl TryFrom<i32> for ImageFormat {
    type Error = FrameError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(ImageFormat::Array),
            1 => Ok(ImageFormat::Library),
            other => Err(FrameError::unknown_image_format(other)),
        }
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "array" | "opencv" => Ok(ImageFormat::Array),
            "library" | "pil" => Ok(ImageFormat::Library),
            _ => Err(FrameError::unknown_image_format(s)),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested colour handling when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourMode {
    /// Force three-channel colour
    #[default]
    Colour,
    /// Force single-channel grayscale
    Grayscale,
    /// Let the decoder decide
    Auto,
}

impl ColourMode {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColourMode::Colour => "colour",
            ColourMode::Grayscale => "grayscale",
            ColourMode::Auto => "auto",
        }
    }
}

impl From<Option<bool>> for ColourMode {
    fn from(colour: Option<bool>) -> Self {
        match colour {
            Some(true) => ColourMode::Colour,
            Some(false) => ColourMode::Grayscale,
            None => ColourMode::Auto,
        }
    }
}

impl From<ColourMode> for Option<bool> {
    fn from(mode: ColourMode) -> Self {
        match mode {
            ColourMode::Colour => Some(true),
            ColourMode::Grayscale => Some(false),
            ColourMode::Auto => None,
        }
    }
}

impl std::str::FromStr for ColourMode {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "colour" | "color" => Ok(ColourMode::Colour),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(ColourMode::Grayscale),
            "auto" => Ok(ColourMode::Auto),
            _ => Err(FrameError::invalid_argument(
                "colour",
                format!("expected 'colour', 'grayscale' or 'auto', got '{s}'"),
            )),
        }
    }
}

impl std::fmt::Display for ColourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interleaved 8-bit raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArray {
    pub width: u32,
    pub height: u32,
    /// 3 for RGB, 1 for gray
    pub channels: u8,
    pub data: Vec<u8>,
}

impl ImageArray {
    /// Shape as `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }

    /// Check if the raster has a single channel.
    pub fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    /// Value of one channel at pixel `(x, y)`.
    pub fn get(&self, x: u32, y: u32, channel: u8) -> Option<u8> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        let idx = ((y as usize * self.width as usize) + x as usize) * self.channels as usize
            + channel as usize;
        self.data.get(idx).copied()
    }

    fn from_rgb(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: 3,
            data: img.into_raw(),
        }
    }

    fn from_gray(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: 1,
            data: img.into_raw(),
        }
    }

    /// Collapse an RGB raster to one channel if all channels agree per pixel.
    fn collapse_if_gray(self) -> Self {
        if self.channels != 3 {
            return self;
        }
        let uniform = self
            .data
            .chunks_exact(3)
            .all(|px| px[0] == px[1] && px[0] == px[2]);
        if !uniform {
            return self;
        }
        Self {
            width: self.width,
            height: self.height,
            channels: 1,
            data: self.data.chunks_exact(3).map(|px| px[0]).collect(),
        }
    }
}

/// A decoded image in the requested representation.
#[derive(Debug, Clone)]
pub enum DecodedImage {
    Array(ImageArray),
    Library(DynamicImage),
}

impl DecodedImage {
    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            DecodedImage::Array(arr) => (arr.width, arr.height),
            DecodedImage::Library(img) => (img.width(), img.height()),
        }
    }

    /// Number of colour channels.
    pub fn channels(&self) -> u8 {
        match self {
            DecodedImage::Array(arr) => arr.channels,
            DecodedImage::Library(img) => img.color().channel_count(),
        }
    }

    /// Which representation this image is in.
    pub fn format(&self) -> ImageFormat {
        match self {
            DecodedImage::Array(_) => ImageFormat::Array,
            DecodedImage::Library(_) => ImageFormat::Library,
        }
    }

    pub fn as_array(&self) -> Option<&ImageArray> {
        match self {
            DecodedImage::Array(arr) => Some(arr),
            DecodedImage::Library(_) => None,
        }
    }

    pub fn as_library(&self) -> Option<&DynamicImage> {
        match self {
            DecodedImage::Library(img) => Some(img),
            DecodedImage::Array(_) => None,
        }
    }
}

/// Read an image from disk.
///
/// # Errors
///
/// Returns [`FrameError::Io`] if the file cannot be read and
/// [`FrameError::Decode`] if the codec rejects its content.
pub fn read_image<P: AsRef<Path>>(
    path: P,
    format: ImageFormat,
    colour: ColourMode,
) -> Result<DecodedImage> {
    let path = path.as_ref();
    let img = open_image(path)?;
    debug!(
        path = %path.display(),
        %format,
        %colour,
        native = ?img.color(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );

    Ok(match format {
        ImageFormat::Array => DecodedImage::Array(read_image_array(img, colour)),
        ImageFormat::Library => DecodedImage::Library(read_image_library(img, colour)),
    })
}

/// Read an image, selecting the representation by its numeric code.
///
/// # Errors
///
/// Returns [`FrameError::UnknownImageFormat`] for codes other than 0
/// (array) and 1 (library), before touching the file.
pub fn read_image_with_code<P: AsRef<Path>>(
    path: P,
    code: i32,
    colour: ColourMode,
) -> Result<DecodedImage> {
    let format = ImageFormat::try_from(code)?;
    read_image(path, format, colour)
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| match e {
        ImageError::IoError(io) => FrameError::Io(io),
        other => FrameError::decode("image", path, other.to_string()),
    })
}

fn read_image_array(img: DynamicImage, colour: ColourMode) -> ImageArray {
    match colour {
        ColourMode::Colour => ImageArray::from_rgb(img.to_rgb8()),
        ColourMode::Grayscale => ImageArray::from_gray(img.to_luma8()),
        ColourMode::Auto => {
            let arr = ImageArray::from_rgb(img.to_rgb8()).collapse_if_gray();
            debug!(channels = arr.channels, "auto colour detection");
            arr
        }
    }
}

fn read_image_library(img: DynamicImage, colour: ColourMode) -> DynamicImage {
    if colour == ColourMode::Grayscale && img.color() != ColorType::L8 {
        return DynamicImage::ImageLuma8(img.to_luma8());
    }
    img
}
