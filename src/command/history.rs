// History - Undo and redo of track edits

use crate::command::commands::SyncCommand;
use crate::command::trait_def::{CommandResult, UndoableCommand};
use crate::config::HistoryConfig;
use crate::track::SyncData;
use std::collections::VecDeque;

/// Owns submitted edits and steps the track data back and forth through them
///
/// Applied edits sit on the undo side, newest last; undone edits move to the
/// redo side. A successful `exec` always leaves at least one undoable edit
/// and an empty redo side: branching off an undone state drops those edits.
///
/// There is no limit by default. With `max_history`, the oldest applied edit
/// is dropped once the limit is exceeded; the limit is at least 1.
#[derive(Debug, Default)]
pub struct History {
    /// Applied edits; the back is the next to undo
    undo_stack: VecDeque<SyncCommand>,

    /// Undone edits; the last is the next to redo
    redo_stack: Vec<SyncCommand>,

    max_history: Option<usize>,
}

impl History {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `max_history` undo steps
    ///
    /// A limit of 0 is raised to 1 so the edit just applied stays undoable.
    pub fn with_capacity(max_history: usize) -> Self {
        let max_history = max_history.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(max_history),
            redo_stack: Vec::new(),
            max_history: Some(max_history),
        }
    }

    pub fn with_config(config: &HistoryConfig) -> Self {
        match config.max_history {
            Some(max_history) => Self::with_capacity(max_history),
            None => Self::new(),
        }
    }

    /// Execute a command and record it on the undo stack
    ///
    /// The command is consumed: from here on the history is its only owner.
    /// Any redo history is released.
    ///
    /// # Errors
    /// Returns an error if the command fails to execute. Nothing is recorded
    /// in that case and the redo stack is left as it was.
    pub fn exec(
        &mut self,
        command: impl Into<SyncCommand>,
        data: &mut SyncData,
    ) -> CommandResult<()> {
        let mut command = command.into();

        if let Err(err) = command.execute(data) {
            tracing::warn!("Command '{}' failed: {}", command.description(), err);
            return Err(err);
        }
        tracing::debug!("Executed '{}'", command.description());

        self.undo_stack.push_back(command);

        if !self.redo_stack.is_empty() {
            tracing::trace!("Releasing {} redo steps", self.redo_stack.len());
            self.redo_stack.clear();
        }

        if let Some(max_history) = self.max_history {
            while self.undo_stack.len() > max_history {
                if let Some(evicted) = self.undo_stack.pop_front() {
                    tracing::trace!("History full, dropping '{}'", evicted.description());
                }
            }
        }

        Ok(())
    }

    /// Undo the most recent command
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    ///
    /// # Errors
    /// Returns an error if the command's undo fails; the command stays on the
    /// undo stack.
    pub fn undo(&mut self, data: &mut SyncData) -> CommandResult<bool> {
        let Some(mut command) = self.undo_stack.pop_back() else {
            return Ok(false);
        };

        if let Err(err) = command.undo(data) {
            tracing::warn!("Undo of '{}' failed: {}", command.description(), err);
            self.undo_stack.push_back(command);
            return Err(err);
        }
        tracing::debug!("Undid '{}'", command.description());

        self.redo_stack.push(command);
        Ok(true)
    }

    /// Redo the most recently undone command
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    ///
    /// # Errors
    /// Returns an error if re-executing fails; the command stays on the redo
    /// stack.
    pub fn redo(&mut self, data: &mut SyncData) -> CommandResult<bool> {
        let Some(mut command) = self.redo_stack.pop() else {
            return Ok(false);
        };

        if let Err(err) = command.execute(data) {
            tracing::warn!("Redo of '{}' failed: {}", command.description(), err);
            self.redo_stack.push(command);
            return Err(err);
        }
        tracing::debug!("Redid '{}'", command.description());

        self.undo_stack.push_back(command);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label for an "Undo ..." menu entry
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|cmd| cmd.description())
    }

    /// Label for a "Redo ..." menu entry
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|cmd| cmd.description())
    }

    /// Drop every recorded edit; the track data is left as it is
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_history(&self) -> Option<usize> {
        self.max_history
    }
}
