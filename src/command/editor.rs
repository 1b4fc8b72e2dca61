// SyncEditData - Track data bundled with its edit history

use crate::command::commands::SyncCommand;
use crate::command::history::History;
use crate::command::trait_def::CommandResult;
use crate::config::HistoryConfig;
use crate::track::SyncData;

/// Tracks plus the history of edits made to them
///
/// This is the surface a host application drives: every recorded change goes
/// through `exec`, and `undo`/`redo` step through what was recorded.
#[derive(Debug, Default)]
pub struct SyncEditData {
    data: SyncData,
    history: History,
}

impl SyncEditData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &HistoryConfig) -> Self {
        Self {
            data: SyncData::new(),
            history: History::with_config(config),
        }
    }

    /// Wrap existing track data with an empty history
    pub fn from_data(data: SyncData) -> Self {
        Self {
            data,
            history: History::new(),
        }
    }

    /// Apply and record a command, releasing any redo history
    pub fn exec(&mut self, command: impl Into<SyncCommand>) -> CommandResult<()> {
        self.history.exec(command, &mut self.data)
    }

    /// Step back one command; `Ok(false)` if there was nothing to undo
    pub fn undo(&mut self) -> CommandResult<bool> {
        self.history.undo(&mut self.data)
    }

    /// Step forward one command; `Ok(false)` if there was nothing to redo
    pub fn redo(&mut self) -> CommandResult<bool> {
        self.history.redo(&mut self.data)
    }

    pub fn data(&self) -> &SyncData {
        &self.data
    }

    /// Direct access to the tracks
    ///
    /// Changes made here are not recorded. Use it for setup such as creating
    /// tracks, not for edits that should be undoable.
    pub fn data_mut(&mut self) -> &mut SyncData {
        &mut self.data
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Give back the track data, releasing the history
    pub fn into_data(self) -> SyncData {
        self.data
    }
}
