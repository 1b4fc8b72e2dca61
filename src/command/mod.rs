// Command Pattern for Undo/Redo functionality
//
// Every change to track data that should be undoable goes through an
// UndoableCommand submitted to a History.
//
// Architecture:
// - UndoableCommand trait: Defines execute(), undo(), description()
// - EditCommand: sets or deletes one key frame
// - MultiCommand: ordered group of commands, undone in reverse order
// - SyncCommand: the closed set of commands the history owns
// - History: undo/redo stacks
// - SyncEditData: SyncData + History behind one exec/undo/redo surface

pub mod commands;
pub mod editor;
pub mod history;
pub mod trait_def;

pub use commands::{EditCommand, MultiCommand, SyncCommand};
pub use editor::SyncEditData;
pub use history::History;
pub use trait_def::{CommandError, CommandResult, UndoableCommand};
