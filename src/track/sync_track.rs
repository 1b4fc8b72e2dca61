// SyncTrack - Sparse row-indexed store of key frames
//
// A track maps row indices to optional key frames. Rows without a key frame
// take their value from the surrounding keys when the curve is evaluated.

use crate::track::key_frame::{Interpolation, KeyFrame};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

/// A named parameter curve made of key frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncTrack {
    /// Track name (unique within a SyncData)
    pub name: String,

    /// Key frames sorted by row
    keys: BTreeMap<usize, KeyFrame>,
}

impl SyncTrack {
    /// Create a new empty track
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: BTreeMap::new(),
        }
    }

    /// Check whether a key frame exists at `row`
    pub fn is_key_frame(&self, row: usize) -> bool {
        self.keys.contains_key(&row)
    }

    /// Get the key frame at `row`, if any
    pub fn key_frame(&self, row: usize) -> Option<&KeyFrame> {
        self.keys.get(&row)
    }

    /// Set the value at `row`
    ///
    /// Creates a step key if the row is empty. An existing key keeps its
    /// interpolation and only has its value replaced.
    pub fn set_key_frame(&mut self, row: usize, value: f32) {
        self.keys
            .entry(row)
            .and_modify(|key| key.value = value)
            .or_insert_with(|| KeyFrame::new(value));
    }

    /// Store `key` at `row`, replacing whatever was there
    pub fn insert_key_frame(&mut self, row: usize, key: KeyFrame) {
        self.keys.insert(row, key);
    }

    /// Remove the key frame at `row` (no-op if absent)
    pub fn delete_key_frame(&mut self, row: usize) -> Option<KeyFrame> {
        self.keys.remove(&row)
    }

    /// Change the interpolation of an existing key
    ///
    /// Returns false if there is no key at `row`.
    pub fn set_interpolation(&mut self, row: usize, interpolation: Interpolation) -> bool {
        match self.keys.get_mut(&row) {
            Some(key) => {
                key.interpolation = interpolation;
                true
            }
            None => false,
        }
    }

    /// Iterate over all key frames in row order
    pub fn key_frames(&self) -> impl Iterator<Item = (usize, &KeyFrame)> {
        self.keys.iter().map(|(row, key)| (*row, key))
    }

    /// Number of key frames
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at or before `row`
    pub fn prev_key(&self, row: usize) -> Option<(usize, &KeyFrame)> {
        self.keys
            .range(..=row)
            .next_back()
            .map(|(row, key)| (*row, key))
    }

    /// First key strictly after `row`
    pub fn next_key(&self, row: usize) -> Option<(usize, &KeyFrame)> {
        self.keys
            .range((Bound::Excluded(row), Bound::Unbounded))
            .next()
            .map(|(row, key)| (*row, key))
    }

    /// Evaluate the curve at a (possibly fractional) row
    ///
    /// An empty track evaluates to 0.0. Rows before the first key take the
    /// first key's value, rows at or after the last key take the last value.
    pub fn value_at(&self, row: f64) -> f32 {
        let Some((&first_row, first)) = self.keys.first_key_value() else {
            return 0.0;
        };
        if row < first_row as f64 {
            return first.value;
        }

        let whole_row = row.floor() as usize;
        let (prev_row, prev) = self.prev_key(whole_row).unwrap_or((first_row, first));
        match self.next_key(whole_row) {
            None => prev.value,
            Some((next_row, next)) => {
                let t = ((row - prev_row as f64) / (next_row - prev_row) as f64) as f32;
                prev.value + (next.value - prev.value) * prev.interpolation.shape(t)
            }
        }
    }
}
