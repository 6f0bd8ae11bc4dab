// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Frame value type system.
//!
//! Frames carry an open-ended set of named values (CSV columns, user
//! supplied annotations, derived measurements). [`FrameValue`] is the
//! single variant type stored for each of them. Values serialize to plain
//! JSON-like data. They do not deserialize: an untagged representation
//! cannot tell `Bytes` from a small-integer `Array`, nor `UInt` from
//! `Int`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Nested mapping of field name -> value.
pub type ValueMap = BTreeMap<String, FrameValue>;

/// Unified value type for frame attributes.
///
/// Values are stored as-is: no type is enforced per field, and two
/// frames may carry different types under the same name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrameValue {
    Bool(bool),

    // Integers are widened on insertion
    Int(i64),
    UInt(u64),

    Float(f64),

    String(String),

    // Raw binary payloads (thumbnails, serialized blobs)
    Bytes(Vec<u8>),

    // Heterogeneous list, e.g. `[1, 0.5, "some_string"]`
    Array(Vec<FrameValue>),

    // Nested record
    Map(ValueMap),

    Null,
}

impl FrameValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is a numeric type (integers or floats).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FrameValue::Int(_) | FrameValue::UInt(_) | FrameValue::Float(_)
        )
    }

    /// Check if this value is an integer type (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        matches!(self, FrameValue::Int(_) | FrameValue::UInt(_))
    }

    /// Check if this value is a container type (array or map).
    pub fn is_container(&self) -> bool {
        matches!(self, FrameValue::Array(_) | FrameValue::Map(_))
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, FrameValue::Null)
    }

    // ========================================================================
    // Type Conversion Methods
    // ========================================================================

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FrameValue::Int(v) => Some(*v as f64),
            FrameValue::UInt(v) => Some(*v as f64),
            FrameValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for integer types only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FrameValue::Int(v) => Some(*v),
            FrameValue::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get the inner boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FrameValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrameValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FrameValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[FrameValue]> {
        match self {
            FrameValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get the inner map.
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            FrameValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            FrameValue::Bool(_) => "bool",
            FrameValue::Int(_) => "int",
            FrameValue::UInt(_) => "uint",
            FrameValue::Float(_) => "float",
            FrameValue::String(_) => "string",
            FrameValue::Bytes(_) => "bytes",
            FrameValue::Array(_) => "array",
            FrameValue::Map(_) => "map",
            FrameValue::Null => "null",
        }
    }
}

impl std::fmt::Display for FrameValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameValue::Bool(v) => write!(f, "{v}"),
            FrameValue::Int(v) => write!(f, "{v}"),
            FrameValue::UInt(v) => write!(f, "{v}"),
            FrameValue::Float(v) => write!(f, "{v}"),
            FrameValue::String(s) => write!(f, "{s}"),
            FrameValue::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            FrameValue::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            FrameValue::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            FrameValue::Null => write!(f, "null"),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FrameValue {
            fn from(v: $t) -> Self {
                FrameValue::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FrameValue {
            fn from(v: $t) -> Self {
                FrameValue::UInt(u64::from(v))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for FrameValue {
    fn from(v: bool) -> Self {
        FrameValue::Bool(v)
    }
}

impl From<f32> for FrameValue {
    fn from(v: f32) -> Self {
        FrameValue::Float(f64::from(v))
    }
}

impl From<f64> for FrameValue {
    fn from(v: f64) -> Self {
        FrameValue::Float(v)
    }
}

impl From<&str> for FrameValue {
    fn from(v: &str) -> Self {
        FrameValue::String(v.to_string())
    }
}

impl From<String> for FrameValue {
    fn from(v: String) -> Self {
        FrameValue::String(v)
    }
}

impl<T: Into<FrameValue>> From<Vec<T>> for FrameValue {
    fn from(v: Vec<T>) -> Self {
        FrameValue::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FrameValue>> From<Option<T>> for FrameValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FrameValue::Null, Into::into)
    }
}

impl From<ValueMap> for FrameValue {
    fn from(v: ValueMap) -> Self {
        FrameValue::Map(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(FrameValue::Int(1).is_numeric());
        assert!(FrameValue::UInt(1).is_numeric());
        assert!(FrameValue::Float(0.5).is_numeric());
        assert!(!FrameValue::from("1").is_numeric());
        assert!(!FrameValue::Null.is_numeric());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(FrameValue::Int(-3).as_f64(), Some(-3.0));
        assert_eq!(FrameValue::UInt(7).as_f64(), Some(7.0));
        assert_eq!(FrameValue::Float(0.25).as_f64(), Some(0.25));
        assert_eq!(FrameValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn test_as_i64_rejects_overflow() {
        assert_eq!(FrameValue::UInt(42).as_i64(), Some(42));
        assert_eq!(FrameValue::UInt(u64::MAX).as_i64(), None);
        assert_eq!(FrameValue::Float(1.0).as_i64(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(FrameValue::from(1i32), FrameValue::Int(1));
        assert_eq!(FrameValue::from(1u8), FrameValue::UInt(1));
        assert_eq!(FrameValue::from(0.5f32), FrameValue::Float(0.5));
        assert_eq!(FrameValue::from("abc"), FrameValue::String("abc".into()));
        assert_eq!(FrameValue::from(None::<i32>), FrameValue::Null);
        assert_eq!(
            FrameValue::from(vec![1i64, 2]),
            FrameValue::Array(vec![FrameValue::Int(1), FrameValue::Int(2)])
        );
    }

    #[test]
    fn test_heterogeneous_array() {
        let value = FrameValue::Array(vec![1.into(), 0.5.into(), "some_string".into()]);
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0].type_name(), "int");
        assert_eq!(arr[1].type_name(), "float");
        assert_eq!(arr[2].as_str(), Some("some_string"));
        assert!(value.is_container());
    }

    #[test]
    fn test_display() {
        let value = FrameValue::Array(vec![1.into(), "x".into(), FrameValue::Null]);
        assert_eq!(value.to_string(), "[1, x, null]");
        assert_eq!(FrameValue::Bytes(vec![0; 4]).to_string(), "<4 bytes>");
    }

    #[test]
    fn test_serde_untagged() {
        let value = FrameValue::Array(vec![1.into(), 0.5.into(), "s".into(), true.into()]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[1,0.5,"s",true]"#);
    }

    #[test]
    fn test_serialize_keeps_full_range() {
        let mut map = ValueMap::new();
        map.insert("big".to_string(), FrameValue::UInt(u64::MAX));
        map.insert("neg".to_string(), FrameValue::Int(i64::MIN));
        map.insert("blob".to_string(), FrameValue::Bytes(vec![1, 2]));
        map.insert("none".to_string(), FrameValue::Null);
        let json = serde_json::to_value(FrameValue::Map(map)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "big": u64::MAX,
                "blob": [1, 2],
                "neg": i64::MIN,
                "none": null,
            })
        );
    }
}
