// Track storage - the data that edit commands mutate
//
// SyncData owns a list of SyncTracks; each SyncTrack is a sparse map from
// row to KeyFrame. Commands only use the lookup/set/delete operations.

pub mod data;
pub mod key_frame;
pub mod sync_track;

pub use data::{SyncData, TrackError};
pub use key_frame::{Interpolation, KeyFrame};
pub use sync_track::SyncTrack;
