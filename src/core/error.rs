// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for robotools.
//!
//! Provides error types for frame and file operations:
//! - Argument validation (field/value arity, image representation codes)
//! - Frame construction from unsupported file types
//! - Codec failures while decoding images and point clouds
//! - Pass-through I/O failures

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building frames or decoding their files.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Generic invalid argument
    #[error("Invalid argument for {context}: {message}")]
    InvalidArgument {
        /// What was being validated
        context: String,
        /// Error message
        message: String,
    },

    /// Field names and values differ in count
    #[error("The number of fields and values must be equal (fields: {fields}, values: {values})")]
    LengthMismatch {
        /// Number of field names
        fields: usize,
        /// Number of values
        values: usize,
    },

    /// Image representation that is neither array nor library based
    #[error("Unknown image format {code}.")]
    UnknownImageFormat {
        /// The code or name that was supplied
        code: String,
    },

    /// File category without a decoder
    #[error("Unsupported frame type '{frame_type}' for file {}", path.display())]
    UnsupportedFrameType {
        /// Path of the file
        path: PathBuf,
        /// Category the path classified as
        frame_type: String,
    },

    /// Codec rejected the file content
    #[error("{codec} decode error for {}: {message}", path.display())]
    Decode {
        /// Codec context (e.g., "image", "PLY", "PCD")
        codec: String,
        /// Path of the file being decoded
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration could not be parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O failure from the underlying file read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FrameError {
    /// Create an invalid argument error.
    pub fn invalid_argument(context: impl Into<String>, message: impl Into<String>) -> Self {
        FrameError::InvalidArgument {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a field/value length mismatch error.
    pub fn length_mismatch(fields: usize, values: usize) -> Self {
        FrameError::LengthMismatch { fields, values }
    }

    /// Create an unknown image format error.
    pub fn unknown_image_format(code: impl ToString) -> Self {
        FrameError::UnknownImageFormat {
            code: code.to_string(),
        }
    }

    /// Create an unsupported frame type error.
    pub fn unsupported_frame_type(path: impl Into<PathBuf>, frame_type: impl Into<String>) -> Self {
        FrameError::UnsupportedFrameType {
            path: path.into(),
            frame_type: frame_type.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(
        codec: impl Into<String>,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        FrameError::Decode {
            codec: codec.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        FrameError::Config {
            message: message.into(),
        }
    }

    /// Check if this error reports a caller mistake rather than a file problem.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FrameError::InvalidArgument { .. }
                | FrameError::LengthMismatch { .. }
                | FrameError::UnknownImageFormat { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            FrameError::InvalidArgument { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            FrameError::LengthMismatch { fields, values } => vec![
                ("fields", fields.to_string()),
                ("values", values.to_string()),
            ],
            FrameError::UnknownImageFormat { code } => vec![("code", code.clone())],
            FrameError::UnsupportedFrameType { path, frame_type } => vec![
                ("path", path.display().to_string()),
                ("frame_type", frame_type.clone()),
            ],
            FrameError::Decode {
                codec,
                path,
                message,
            } => vec![
                ("codec", codec.clone()),
                ("path", path.display().to_string()),
                ("message", message.clone()),
            ],
            FrameError::Config { message } => vec![("message", message.clone())],
            FrameError::Io(err) => vec![
                ("kind", format!("{:?}", err.kind())),
                ("message", err.to_string()),
            ],
        }
    }
}

/// Result type for robotools operations.
pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = FrameError::invalid_argument("pose", "missing quat_w");
        assert!(matches!(err, FrameError::InvalidArgument { .. }));
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument for pose: missing quat_w");
    }

    #[test]
    fn test_length_mismatch_error() {
        let err = FrameError::length_mismatch(2, 1);
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "The number of fields and values must be equal (fields: 2, values: 1)"
        );
    }

    #[test]
    fn test_unknown_image_format_error() {
        let err = FrameError::unknown_image_format(-1);
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Unknown image format -1.");
    }

    #[test]
    fn test_unsupported_frame_type_error() {
        let err = FrameError::unsupported_frame_type("/data/log.csv", "csv");
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Unsupported frame type 'csv' for file /data/log.csv"
        );
    }

    #[test]
    fn test_decode_error() {
        let err = FrameError::decode("PLY", "/data/cloud.ply", "bad header");
        assert_eq!(
            err.to_string(),
            "PLY decode error for /data/cloud.ply: bad header"
        );
    }

    #[test]
    fn test_from_io_error_is_transparent() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FrameError = io_err.into();
        assert!(matches!(err, FrameError::Io(_)));
        assert_eq!(err.to_string(), "file not found");
    }

    #[test]
    fn test_log_fields_length_mismatch() {
        let fields = FrameError::length_mismatch(3, 4).log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("fields", "3".to_string()));
        assert_eq!(fields[1], ("values", "4".to_string()));
    }

    #[test]
    fn test_log_fields_decode() {
        let fields = FrameError::decode("PCD", "a.pcd", "oops").log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].0, "codec");
        assert_eq!(fields[0].1, "PCD");
        assert_eq!(fields[1].1, "a.pcd");
        assert_eq!(fields[2].1, "oops");
    }

    #[test]
    fn test_log_fields_io() {
        let err: FrameError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        let fields = err.log_fields();
        assert_eq!(fields[0], ("kind", "NotFound".to_string()));
        assert_eq!(fields[1], ("message", "gone".to_string()));
    }
}
