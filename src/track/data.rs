// SyncData - Collection of tracks addressed by index

use crate::track::sync_track::SyncTrack;
use serde::{Deserialize, Serialize};

/// Errors raised when addressing tracks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("No track at index {index} ({count} tracks)")]
    NoSuchTrack { index: usize, count: usize },
}

/// The set of tracks that commands operate on
///
/// Track indices are stable: tracks are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncData {
    tracks: Vec<SyncTrack>,
}

impl SyncData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a track and return its index
    ///
    /// If a track with this name already exists its index is returned instead.
    pub fn create_track(&mut self, name: &str) -> usize {
        if let Some(index) = self.find_track(name) {
            return index;
        }
        self.tracks.push(SyncTrack::new(name));
        self.tracks.len() - 1
    }

    /// Find a track index by name
    pub fn find_track(&self, name: &str) -> Option<usize> {
        self.tracks.iter().position(|track| track.name == name)
    }

    pub fn track(&self, index: usize) -> Result<&SyncTrack, TrackError> {
        let count = self.tracks.len();
        self.tracks
            .get(index)
            .ok_or(TrackError::NoSuchTrack { index, count })
    }

    pub fn track_mut(&mut self, index: usize) -> Result<&mut SyncTrack, TrackError> {
        let count = self.tracks.len();
        self.tracks
            .get_mut(index)
            .ok_or(TrackError::NoSuchTrack { index, count })
    }

    pub fn tracks(&self) -> &[SyncTrack] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
