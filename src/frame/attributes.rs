// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Named attribute storage for frames.
//!
//! Field names are case-insensitive: every name is lowercased before it
//! is stored or looked up, so `"Att_1"` and `"att_1"` address the same
//! slot. Values are stored as given; there is no removal.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{FrameError, FrameValue, Result};

/// Open-ended mapping of lowercased field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attributes {
    fields: BTreeMap<String, FrameValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field, replacing any previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<FrameValue>) {
        self.fields.insert(name.to_lowercase(), value.into());
    }

    /// Set several fields from parallel name and value sequences.
    ///
    /// Nothing is stored unless both sequences have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] when the counts differ.
    pub fn extend<S, V>(&mut self, names: &[S], values: Vec<V>) -> Result<()>
    where
        S: AsRef<str>,
        V: Into<FrameValue>,
    {
        if names.len() != values.len() {
            return Err(FrameError::length_mismatch(names.len(), values.len()));
        }
        for (name, value) in names.iter().zip(values) {
            self.insert(name.as_ref(), value);
        }
        Ok(())
    }

    /// Check if a field exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_lowercase())
    }

    /// Get a field value (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FrameValue> {
        self.fields.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stored field names, lowercased and sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrameValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_case_insensitive() {
        let mut attrs = Attributes::new();
        attrs.insert("a", 1);
        assert!(attrs.contains("a"));
        assert!(attrs.contains("A"));
        assert!(!attrs.contains("b"));
    }

    #[test]
    fn test_names_are_lowercased() {
        let mut attrs = Attributes::new();
        attrs.insert("Att_4", "x");
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["att_4"]);
    }

    #[test]
    fn test_insert_overwrites_same_slot() {
        let mut attrs = Attributes::new();
        attrs.insert("Speed", 1.5);
        attrs.insert("speed", 2.5);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("SPEED"), Some(&FrameValue::Float(2.5)));
    }

    #[test]
    fn test_extend_length_mismatch() {
        let mut attrs = Attributes::new();
        let err = attrs.extend(&["a", "b"], vec![1]).unwrap_err();
        assert!(matches!(
            err,
            FrameError::LengthMismatch {
                fields: 2,
                values: 1
            }
        ));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_extend_heterogeneous_values() {
        let mut attrs = Attributes::new();
        attrs
            .extend(
                &["att_1", "att_2", "att_3"],
                vec![
                    FrameValue::from(1),
                    FrameValue::from(0.5),
                    FrameValue::from("some_string"),
                ],
            )
            .unwrap();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs.get("att_2").and_then(FrameValue::as_f64), Some(0.5));
    }

    #[test]
    fn test_empty_extend() {
        let mut attrs = Attributes::new();
        attrs.extend::<&str, FrameValue>(&[], Vec::new()).unwrap();
        assert!(attrs.is_empty());
    }
}
