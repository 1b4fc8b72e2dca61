// Sync Edit - Undo/redo history for key-frame track editing

pub mod command;
pub mod config;
pub mod track;

// Re-export commonly used types for convenience
pub use command::{
    CommandError, CommandResult, EditCommand, History, MultiCommand, SyncCommand, SyncEditData,
    UndoableCommand,
};
pub use config::HistoryConfig;
pub use track::{Interpolation, KeyFrame, SyncData, SyncTrack, TrackError};
