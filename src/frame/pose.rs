// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Rigid frame pose.
//!
//! A [`Pose`] is a 4x4 homogeneous transform (glam `DMat4`, column-major)
//! holding a translation and a rotation. It converts to and from a flat
//! component map with the keys `pos_x`, `pos_y`, `pos_z` for translation
//! and `quat_w`, `quat_x`, `quat_y`, `quat_z` for the rotation as a unit
//! quaternion.
//!
//! Only three input subsets are accepted: all seven components, the
//! three translation components, or the four rotation components. Any
//! other combination is rejected.

use std::collections::BTreeMap;

use glam::{DMat3, DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

pub const POS_X: &str = "pos_x";
pub const POS_Y: &str = "pos_y";
pub const POS_Z: &str = "pos_z";
pub const QUAT_W: &str = "quat_w";
pub const QUAT_X: &str = "quat_x";
pub const QUAT_Y: &str = "quat_y";
pub const QUAT_Z: &str = "quat_z";

/// Named pose inputs; any subset may be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseComponents {
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub pos_z: Option<f64>,
    pub quat_w: Option<f64>,
    pub quat_x: Option<f64>,
    pub quat_y: Option<f64>,
    pub quat_z: Option<f64>,
}

impl PoseComponents {
    /// Translation only.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            pos_x: Some(x),
            pos_y: Some(y),
            pos_z: Some(z),
            ..Self::default()
        }
    }

    /// Rotation only, as quaternion `(w, x, y, z)`.
    pub fn rotation(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            quat_w: Some(w),
            quat_x: Some(x),
            quat_y: Some(y),
            quat_z: Some(z),
            ..Self::default()
        }
    }

    /// Translation and rotation.
    pub fn full(position: [f64; 3], quat_wxyz: [f64; 4]) -> Self {
        let [x, y, z] = position;
        let [qw, qx, qy, qz] = quat_wxyz;
        Self {
            pos_x: Some(x),
            pos_y: Some(y),
            pos_z: Some(z),
            quat_w: Some(qw),
            quat_x: Some(qx),
            quat_y: Some(qy),
            quat_z: Some(qz),
        }
    }

    /// Collect components from `(name, value)` pairs; unknown names are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut out = Self::default();
        for (name, value) in pairs {
            let slot = match name {
                POS_X => &mut out.pos_x,
                POS_Y => &mut out.pos_y,
                POS_Z => &mut out.pos_z,
                QUAT_W => &mut out.quat_w,
                QUAT_X => &mut out.quat_x,
                QUAT_Y => &mut out.quat_y,
                QUAT_Z => &mut out.quat_z,
                _ => continue,
            };
            *slot = Some(value);
        }
        out
    }

    /// `None` unless all three are present and finite.
    fn position(&self) -> Option<DVec3> {
        let t = DVec3::new(self.pos_x?, self.pos_y?, self.pos_z?);
        t.is_finite().then_some(t)
    }

    fn quaternion(&self) -> Option<DQuat> {
        Some(DQuat::from_xyzw(
            self.quat_x?,
            self.quat_y?,
            self.quat_z?,
            self.quat_w?,
        ))
    }

    fn has_any_position(&self) -> bool {
        self.pos_x.is_some() || self.pos_y.is_some() || self.pos_z.is_some()
    }

    fn has_any_rotation(&self) -> bool {
        self.quat_w.is_some() || self.quat_x.is_some() || self.quat_y.is_some() || self.quat_z.is_some()
    }
}

/// Homogeneous rigid transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    matrix: DMat4,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    pub fn identity() -> Self {
        Self {
            matrix: DMat4::IDENTITY,
        }
    }

    /// Translation with identity rotation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            matrix: DMat4::from_translation(translation),
        }
    }

    /// Wrap an existing homogeneous matrix.
    pub fn from_matrix(matrix: DMat4) -> Self {
        Self { matrix }
    }

    /// Build a pose from one of the accepted component subsets.
    ///
    /// Returns `None` for a partial or empty set, a non-finite translation,
    /// or a zero or non-finite quaternion.
    pub fn from_components(components: &PoseComponents) -> Option<Self> {
        let position = components.position();
        let rotation = components.quaternion();

        match (position, rotation) {
            (Some(t), Some(q)) => {
                let mut pose = Self::from_translation(t);
                pose.set_rotation_matrix(quat_to_matrix(q)?);
                Some(pose)
            }
            (Some(t), None) if !components.has_any_rotation() => Some(Self::from_translation(t)),
            (None, Some(q)) if !components.has_any_position() => {
                let mut pose = Self::identity();
                pose.set_rotation_matrix(quat_to_matrix(q)?);
                Some(pose)
            }
            _ => None,
        }
    }

    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Translation column of the transform.
    pub fn translation(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
    }

    /// Upper-left 3x3 rotation block.
    pub fn rotation_matrix(&self) -> DMat3 {
        DMat3::from_mat4(self.matrix)
    }

    /// Overwrite the rotation block, keeping the translation.
    pub fn set_rotation_matrix(&mut self, rotation: DMat3) {
        self.matrix = DMat4::from_cols(
            rotation.x_axis.extend(0.0),
            rotation.y_axis.extend(0.0),
            rotation.z_axis.extend(0.0),
            self.matrix.w_axis,
        );
    }

    /// Rotation as a unit quaternion.
    pub fn quaternion(&self) -> DQuat {
        DQuat::from_mat3(&self.rotation_matrix())
    }

    /// Flat component map with all seven keys.
    pub fn to_component_map(&self) -> BTreeMap<String, f64> {
        let t = self.translation();
        let q = self.quaternion();
        [
            (POS_X, t.x),
            (POS_Y, t.y),
            (POS_Z, t.z),
            (QUAT_W, q.w),
            (QUAT_X, q.x),
            (QUAT_Y, q.y),
            (QUAT_Z, q.z),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Components of this pose, all seven present.
    pub fn to_components(&self) -> PoseComponents {
        let t = self.translation();
        let q = self.quaternion();
        PoseComponents::full([t.x, t.y, t.z], [q.w, q.x, q.y, q.z])
    }
}

/// Normalized quaternion to rotation matrix; `None` for a zero quaternion.
fn quat_to_matrix(q: DQuat) -> Option<DMat3> {
    let len = q.length();
    if len == 0.0 || !len.is_finite() {
        return None;
    }
    Some(DMat3::from_quat(q / len))
}
