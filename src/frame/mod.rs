// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Frame metadata model.
//!
//! A frame is one unit of sensor or log data: a single image, a single
//! point cloud, or one record of a CSV file.
//!
//! - [`Frame`] - identity, optional timestamp and pose, and named attributes
//! - [`CsvFrame`] - a frame whose attributes come from CSV headers and values
//! - [`FileFrame`] - a frame backed by an image or point cloud file, with
//!   filename-derived properties and a [`FileFrame::read`] capability

pub mod attributes;
pub mod filename;
pub mod pose;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::io::detection::{self, frametype_from_filepath};
use crate::io::image::{read_image, ColourMode, DecodedImage, ImageFormat};
use crate::io::pointcloud::{read_pointcloud, PointCloud};
use crate::{FrameError, FrameType, FrameValue, Result};

pub use attributes::Attributes;
pub use pose::{Pose, PoseComponents};

/// Identity, timing, pose and attributes shared by every frame kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    frame_id: i64,
    timestamp: Option<f64>,
    pose: Option<Pose>,
    attributes: Attributes,
}

impl Frame {
    pub fn new(frame_id: i64) -> Self {
        Self {
            frame_id,
            timestamp: None,
            pose: None,
            attributes: Attributes::new(),
        }
    }

    pub fn frame_id(&self) -> i64 {
        self.frame_id
    }

    pub fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: f64) {
        self.timestamp = Some(timestamp);
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Add or replace one attribute; the name is lowercased.
    pub fn add_data(&mut self, name: &str, value: impl Into<FrameValue>) {
        self.attributes.insert(name, value);
    }

    /// Add several attributes from parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the counts differ; no
    /// attribute is added in that case.
    pub fn add_fields<S, V>(&mut self, names: &[S], values: Vec<V>) -> Result<()>
    where
        S: AsRef<str>,
        V: Into<FrameValue>,
    {
        self.attributes.extend(names, values)
    }

    /// Check if an attribute exists (case-insensitive).
    pub fn has_field(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Look up an attribute (case-insensitive).
    pub fn field(&self, name: &str) -> Option<&FrameValue> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    // ========================================================================
    // Pose
    // ========================================================================

    pub fn pose(&self) -> Option<&Pose> {
        self.pose.as_ref()
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = Some(pose);
    }

    /// Set the pose from named components.
    ///
    /// Accepts all seven components, translation only, or rotation only.
    /// Any other subset leaves the current pose untouched and returns `false`.
    pub fn set_pose_from_components(&mut self, components: &PoseComponents) -> bool {
        match Pose::from_components(components) {
            Some(pose) => {
                self.pose = Some(pose);
                true
            }
            None => {
                warn!(
                    frame_id = self.frame_id,
                    ?components,
                    "rejected incomplete pose components"
                );
                false
            }
        }
    }

    /// Pose as a flat component map, or `None` when no pose is set.
    pub fn pose_components(&self) -> Option<std::collections::BTreeMap<String, f64>> {
        self.pose.as_ref().map(Pose::to_component_map)
    }

    /// Serializable view of this frame.
    pub fn summary(&self) -> FrameSummary {
        FrameSummary {
            frame_id: self.frame_id,
            timestamp: self.timestamp,
            pose: self.pose_components(),
            attributes: self.attributes.clone(),
        }
    }
}

/// Serializable snapshot of a [`Frame`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSummary {
    pub frame_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<std::collections::BTreeMap<String, f64>>,
    pub attributes: Attributes,
}

// ============================================================================
// CSV frames
// ============================================================================

/// One record of a CSV file; headers become attribute names.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvFrame {
    frame: Frame,
}

impl CsvFrame {
    /// Create a CSV frame from parallel header and value sequences.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the counts differ.
    pub fn new<S, V>(frame_id: i64, fields: &[S], values: Vec<V>) -> Result<Self>
    where
        S: AsRef<str>,
        V: Into<FrameValue>,
    {
        let mut frame = Frame::new(frame_id);
        frame.add_fields(fields, values)?;
        Ok(Self { frame })
    }

    /// A CSV frame without any fields.
    pub fn empty(frame_id: i64) -> Self {
        Self {
            frame: Frame::new(frame_id),
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    pub fn into_frame(self) -> Frame {
        self.frame
    }
}

// ============================================================================
// File frames
// ============================================================================

/// What kind of file backs a [`FileFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    PointCloud,
}

impl FileKind {
    pub fn frame_type(&self) -> FrameType {
        match self {
            FileKind::Image => FrameType::Image,
            FileKind::PointCloud => FrameType::PointCloud,
        }
    }
}

/// Options for reading a file frame's content.
///
/// Only image frames use them; point clouds have no decode options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Representation of decoded images
    pub image_format: ImageFormat,
    /// Colour handling of decoded images
    pub colour: ColourMode,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_format(mut self, image_format: ImageFormat) -> Self {
        self.image_format = image_format;
        self
    }

    pub fn with_colour(mut self, colour: ColourMode) -> Self {
        self.colour = colour;
        self
    }
}

/// Decoded content of a file frame.
#[derive(Debug, Clone)]
pub enum FrameData {
    Image(DecodedImage),
    PointCloud(PointCloud),
}

impl FrameData {
    pub fn as_image(&self) -> Option<&DecodedImage> {
        match self {
            FrameData::Image(img) => Some(img),
            FrameData::PointCloud(_) => None,
        }
    }

    pub fn as_pointcloud(&self) -> Option<&PointCloud> {
        match self {
            FrameData::PointCloud(pcd) => Some(pcd),
            FrameData::Image(_) => None,
        }
    }
}

/// A frame stored as an individual file.
///
/// Filename properties are recomputed from the path on every access.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFrame {
    frame: Frame,
    filepath: PathBuf,
    kind: FileKind,
}

impl FileFrame {
    pub fn new(frame_id: i64, filepath: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            frame: Frame::new(frame_id),
            filepath: filepath.into(),
            kind,
        }
    }

    /// Image-backed frame.
    pub fn image(frame_id: i64, filepath: impl Into<PathBuf>) -> Self {
        Self::new(frame_id, filepath, FileKind::Image)
    }

    /// Point-cloud-backed frame.
    pub fn pointcloud(frame_id: i64, filepath: impl Into<PathBuf>) -> Self {
        Self::new(frame_id, filepath, FileKind::PointCloud)
    }

    /// Frame whose kind is picked from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::UnsupportedFrameType`] for CSV and unknown files.
    pub fn from_path(frame_id: i64, filepath: impl Into<PathBuf>) -> Result<Self> {
        let filepath = filepath.into();
        let kind = match frametype_from_filepath(&filepath) {
            FrameType::Image => FileKind::Image,
            FrameType::PointCloud => FileKind::PointCloud,
            other => return Err(FrameError::unsupported_frame_type(filepath, other.as_str())),
        };
        Ok(Self::new(frame_id, filepath, kind))
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    pub fn into_frame(self) -> Frame {
        self.frame
    }

    pub fn frame_id(&self) -> i64 {
        self.frame.frame_id()
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// File name including its extension.
    pub fn filename(&self) -> String {
        detection::file_name(&self.filepath)
    }

    /// File name without the final extension.
    pub fn filestem(&self) -> String {
        filename::filestem(&self.filename()).to_string()
    }

    /// Parent directory; `.` for a bare file name.
    pub fn rootpath(&self) -> PathBuf {
        match self.filepath.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn extension(&self) -> Option<String> {
        filename::extension(&self.filename()).map(str::to_string)
    }

    pub fn prefix(&self) -> Option<String> {
        filename::prefix(&self.filename()).map(str::to_string)
    }

    pub fn user_notes(&self) -> Option<String> {
        filename::user_notes(&self.filename()).map(str::to_string)
    }

    /// Decode the backing file.
    ///
    /// # Errors
    ///
    /// Codec and I/O failures are returned unchanged from the decoder.
    pub fn read(&self, options: &ReadOptions) -> Result<FrameData> {
        debug!(
            frame_id = self.frame_id(),
            path = %self.filepath.display(),
            kind = ?self.kind,
            "reading frame"
        );
        match self.kind {
            FileKind::Image => read_image(&self.filepath, options.image_format, options.colour)
                .map(FrameData::Image),
            FileKind::PointCloud => read_pointcloud(&self.filepath).map(FrameData::PointCloud),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_constructor() {
        let frame = Frame::new(1);
        assert_eq!(frame.frame_id(), 1);
        assert_eq!(frame.timestamp(), None);
        assert!(frame.pose().is_none());
        assert!(frame.attributes().is_empty());
    }

    #[test]
    fn test_add_data_case_insensitive() {
        let mut frame = Frame::new(0);
        frame.add_data("a", 1);
        assert!(frame.has_field("a"));
        assert!(frame.has_field("A"));
        assert!(!frame.has_field("b"));
    }

    #[test]
    fn test_add_fields_mismatch() {
        let mut frame = Frame::new(0);
        let err = frame.add_fields(&["a", "b"], vec![1]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_csv_frame_constructor_without_attributes() {
        let frame = CsvFrame::empty(1);
        assert_eq!(frame.frame().frame_id(), 1);
        assert!(frame.frame().attributes().is_empty());
    }

    #[test]
    fn test_csv_frame_constructor_with_unequal_lengths() {
        let result = CsvFrame::new(1, &["att_1", "att_2"], vec![1]);
        assert!(matches!(result, Err(FrameError::LengthMismatch { .. })));
    }

    #[test]
    fn test_pose_partial_leaves_existing() {
        let mut frame = Frame::new(3);
        assert!(frame.set_pose_from_components(&PoseComponents::translation(1.0, 2.0, 3.0)));
        let before = frame.pose_components();

        let partial = PoseComponents {
            pos_x: Some(9.0),
            ..Default::default()
        };
        assert!(!frame.set_pose_from_components(&partial));
        assert_eq!(frame.pose_components(), before);
    }

    #[test]
    fn test_pose_non_finite_translation_leaves_existing() {
        let mut frame = Frame::new(5);
        assert!(frame.set_pose_from_components(&PoseComponents::translation(1.0, 2.0, 3.0)));
        let before = frame.pose_components();

        assert!(!frame.set_pose_from_components(&PoseComponents::translation(f64::NAN, 0.0, 0.0)));
        assert_eq!(frame.pose_components(), before);
    }

    #[test]
    fn test_pose_components_absent_without_pose() {
        assert!(Frame::new(0).pose_components().is_none());
    }

    #[test]
    fn test_summary_serializes() {
        let mut frame = Frame::new(7).with_timestamp(1.5);
        frame.add_data("Label", "car");
        let json = serde_json::to_value(frame.summary()).unwrap();
        assert_eq!(json["frame_id"], 7);
        assert_eq!(json["timestamp"], 1.5);
        assert_eq!(json["attributes"]["label"], "car");
        assert!(json.get("pose").is_none());
    }

    #[test]
    fn test_file_frame_from_path() {
        let frame = FileFrame::from_path(1, "/path/to/file/001.png").unwrap();
        assert_eq!(frame.kind(), FileKind::Image);
        let frame = FileFrame::from_path(2, "scan_001.pcd").unwrap();
        assert_eq!(frame.kind(), FileKind::PointCloud);
        assert!(FileFrame::from_path(3, "log.csv").is_err());
        assert!(FileFrame::from_path(4, "/path/to/file/001").is_err());
    }

    #[test]
    fn test_rootpath_of_bare_file_name() {
        let frame = FileFrame::image(1, "001.png");
        assert_eq!(frame.rootpath(), PathBuf::from("."));
    }

    #[test]
    fn test_read_options_builder() {
        let options = ReadOptions::new()
            .with_image_format(ImageFormat::Library)
            .with_colour(ColourMode::Auto);
        assert_eq!(options.image_format, ImageFormat::Library);
        assert_eq!(options.colour, ColourMode::Auto);
        assert_eq!(ReadOptions::default().colour, ColourMode::Colour);
    }
}
