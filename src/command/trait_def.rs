// UndoableCommand trait definition

use crate::track::{SyncData, TrackError};

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// The target track could not be addressed
    #[error("Track error: {0}")]
    Track(#[from] TrackError),

    /// Command execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Undo operation failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// A group failed and reverting its finished steps failed too
    #[error("{cause}; rollback failed, track data left partially edited: {rollback}")]
    RollbackFailed {
        cause: Box<CommandError>,
        rollback: String,
    },
}

/// Trait for reversible edits to track data
///
/// Implemented by `EditCommand`, `MultiCommand` and the `SyncCommand` enum
/// that `History` stores. Commands can also be driven directly against a
/// `SyncData` without going through a history.
///
/// # Contract
/// `execute` and `undo` must strictly alternate on a given instance, starting
/// with `execute`. `execute` records whatever it needs to invert itself, and
/// `undo` restores the state exactly as it was before that `execute`.
///
/// # Example
/// ```
/// use sync_edit::command::{EditCommand, UndoableCommand};
/// use sync_edit::track::SyncData;
///
/// let mut data = SyncData::new();
/// let track = data.create_track("camera:zoom");
/// data.track_mut(track).unwrap().set_key_frame(5, 1.0);
///
/// let mut edit = EditCommand::set(track, 5, 2.0);
/// edit.execute(&mut data).unwrap();
/// assert_eq!(data.track(track).unwrap().key_frame(5).map(|k| k.value), Some(2.0));
///
/// edit.undo(&mut data).unwrap();
/// assert_eq!(data.track(track).unwrap().key_frame(5).map(|k| k.value), Some(1.0));
/// ```
pub trait UndoableCommand: Send {
    /// Apply the change, capturing the previous state for undo
    fn execute(&mut self, data: &mut SyncData) -> CommandResult<()>;

    /// Restore the state captured by the last `execute`
    fn undo(&mut self, data: &mut SyncData) -> CommandResult<()>;

    /// Get a human-readable description of the command
    ///
    /// Used for UI display (e.g., "Undo: Set track 0 row 5 to 2.00")
    fn description(&self) -> String;
}
