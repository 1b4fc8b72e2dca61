// Concrete command implementations

use crate::command::trait_def::{CommandError, CommandResult, UndoableCommand};
use crate::track::{KeyFrame, SyncData};

/// Command to set or delete the key frame at one row of one track
///
/// The previous state of the row is captured when the command executes, not
/// when it is built, so the same command can be replayed by redo.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    track: usize,
    row: usize,
    /// Desired value after execute (None = no key frame)
    new_value: Option<f32>,
    /// Row state before the last execute.
    /// Outer None: not captured yet (or already consumed by undo).
    old_key: Option<Option<KeyFrame>>,
}

impl EditCommand {
    /// Create a new EditCommand
    ///
    /// # Arguments
    /// * `track` - Index of the target track
    /// * `row` - Target row
    /// * `existing` - Whether the row should hold a key frame after execute
    /// * `value` - The value to store (ignored when `existing` is false)
    pub fn new(track: usize, row: usize, existing: bool, value: f32) -> Self {
        Self {
            track,
            row,
            new_value: existing.then_some(value),
            old_key: None,
        }
    }

    /// Edit that sets `row` to `value`
    pub fn set(track: usize, row: usize, value: f32) -> Self {
        Self::new(track, row, true, value)
    }

    /// Edit that removes the key frame at `row`
    pub fn delete(track: usize, row: usize) -> Self {
        Self::new(track, row, false, 0.0)
    }

    pub fn track(&self) -> usize {
        self.track
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Whether execute has captured a state that undo can restore
    pub fn is_applied(&self) -> bool {
        self.old_key.is_some()
    }
}

impl UndoableCommand for EditCommand {
    fn execute(&mut self, data: &mut SyncData) -> CommandResult<()> {
        debug_assert!(
            self.old_key.is_none(),
            "EditCommand executed twice without an undo in between"
        );

        let track = data.track_mut(self.track)?;

        // Store old state for undo
        self.old_key = Some(track.key_frame(self.row).copied());

        match self.new_value {
            Some(value) => track.set_key_frame(self.row, value),
            None => {
                track.delete_key_frame(self.row);
            }
        }

        Ok(())
    }

    fn undo(&mut self, data: &mut SyncData) -> CommandResult<()> {
        let track = data.track_mut(self.track)?;

        let old_key = self.old_key.take().ok_or_else(|| {
            CommandError::UndoFailed(format!(
                "No previous state stored for track {} row {}",
                self.track, self.row
            ))
        })?;

        match old_key {
            Some(key) => track.insert_key_frame(self.row, key),
            None => {
                track.delete_key_frame(self.row);
            }
        }

        Ok(())
    }

    fn description(&self) -> String {
        match self.new_value {
            Some(value) => format!("Set track {} row {} to {:.2}", self.track, self.row, value),
            None => format!("Delete track {} row {}", self.track, self.row),
        }
    }
}

/// Ordered group of commands applied and reverted as one step
///
/// Sub-commands execute in insertion order and undo in reverse order, so
/// edits that depend on each other (e.g. two edits to the same row) unwind
/// last-applied-first.
///
/// If a sub-command fails, the steps already taken are reverted before the
/// error is returned, so the group is either fully applied or not at all.
/// Only when that revert itself fails is `CommandError::RollbackFailed`
/// returned, and the track data is then partially edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiCommand {
    commands: Vec<SyncCommand>,
    description: Option<String>,
}

impl MultiCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group with a custom description
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            commands: Vec::new(),
            description: Some(description.into()),
        }
    }

    /// Append a sub-command (before the group is submitted)
    pub fn add(&mut self, command: impl Into<SyncCommand>) {
        self.commands.push(command.into());
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[SyncCommand] {
        &self.commands
    }
}

impl UndoableCommand for MultiCommand {
    fn execute(&mut self, data: &mut SyncData) -> CommandResult<()> {
        for index in 0..self.commands.len() {
            if let Err(err) = self.commands[index].execute(data) {
                // Undo the part of the group that already ran
                let failures = self.commands[..index]
                    .iter_mut()
                    .rev()
                    .filter_map(|done| {
                        done.undo(data)
                            .err()
                            .map(|e| format!("'{}': {}", done.description(), e))
                    })
                    .collect();
                return Err(with_rollback_failures(err, failures));
            }
        }
        Ok(())
    }

    fn undo(&mut self, data: &mut SyncData) -> CommandResult<()> {
        for index in (0..self.commands.len()).rev() {
            if let Err(err) = self.commands[index].undo(data) {
                // Re-apply the part of the group that was already undone
                let failures = self.commands[index + 1..]
                    .iter_mut()
                    .filter_map(|undone| {
                        undone
                            .execute(data)
                            .err()
                            .map(|e| format!("'{}': {}", undone.description(), e))
                    })
                    .collect();
                return Err(with_rollback_failures(err, failures));
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("{} edits", self.commands.len()),
        }
    }
}

/// Attach failed rollback steps to the error that triggered the rollback
///
/// With no failures the group is back where it started and `err` is returned
/// as is. Otherwise the track data is left partially edited.
fn with_rollback_failures(err: CommandError, failures: Vec<String>) -> CommandError {
    if failures.is_empty() {
        return err;
    }
    let rollback = failures.join("; ");
    tracing::error!("Rollback after '{}' failed: {}", err, rollback);
    CommandError::RollbackFailed {
        cause: Box::new(err),
        rollback,
    }
}

/// The closed set of commands the history stores
#[derive(Debug, Clone, PartialEq)]
pub enum SyncCommand {
    Edit(EditCommand),
    Multi(MultiCommand),
}

impl From<EditCommand> for SyncCommand {
    fn from(command: EditCommand) -> Self {
        SyncCommand::Edit(command)
    }
}

impl From<MultiCommand> for SyncCommand {
    fn from(command: MultiCommand) -> Self {
        SyncCommand::Multi(command)
    }
}

impl UndoableCommand for SyncCommand {
    fn execute(&mut self, data: &mut SyncData) -> CommandResult<()> {
        match self {
            SyncCommand::Edit(command) => command.execute(data),
            SyncCommand::Multi(command) => command.execute(data),
        }
    }

    fn undo(&mut self, data: &mut SyncData) -> CommandResult<()> {
        match self {
            SyncCommand::Edit(command) => command.undo(data),
            SyncCommand::Multi(command) => command.undo(data),
        }
    }

    fn description(&self) -> String {
        match self {
            SyncCommand::Edit(command) => command.description(),
            SyncCommand::Multi(command) => command.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{Interpolation, TrackError};

    fn create_test_data() -> SyncData {
        let mut data = SyncData::new();
        data.create_track("camera:x");
        data.create_track("camera:y");
        data
    }

    fn value(data: &SyncData, track: usize, row: usize) -> Option<f32> {
        data.track(track)
            .unwrap()
            .key_frame(row)
            .map(|key| key.value)
    }

    #[test]
    fn test_edit_sets_value() {
        let mut data = create_test_data();
        let mut cmd = EditCommand::set(0, 5, 2.0);

        cmd.execute(&mut data).unwrap();
        assert_eq!(value(&data, 0, 5), Some(2.0));
        assert!(cmd.is_applied());

        cmd.undo(&mut data).unwrap();
        assert_eq!(value(&data, 0, 5), None);
        assert!(!cmd.is_applied());
    }

    #[test]
    fn test_edit_overwrite_restores_old_value() {
        let mut data = create_test_data();
        data.track_mut(0).unwrap().set_key_frame(5, 1.0);

        let mut cmd = EditCommand::set(0, 5, 3.0);
        cmd.execute(&mut data).unwrap();
        assert_eq!(value(&data, 0, 5), Some(3.0));

        cmd.undo(&mut data).unwrap();
        assert_eq!(value(&data, 0, 5), Some(1.0));
    }

    #[test]
    fn test_edit_delete_restores_interpolation() {
        let mut data = create_test_data();
        let key = KeyFrame::with_interpolation(4.0, Interpolation::Smooth);
        data.track_mut(1).unwrap().insert_key_frame(2, key);

        let mut cmd = EditCommand::delete(1, 2);
        cmd.execute(&mut data).unwrap();
        assert!(!data.track(1).unwrap().is_key_frame(2));

        cmd.undo(&mut data).unwrap();
        assert_eq!(data.track(1).unwrap().key_frame(2), Some(&key));
    }

    #[test]
    fn test_delete_absent_row_is_noop() {
        let mut data = create_test_data();
        data.track_mut(0).unwrap().set_key_frame(1, 9.0);
        let before = data.clone();

        let mut cmd = EditCommand::delete(0, 5);
        cmd.execute(&mut data).unwrap();
        assert_eq!(data, before);

        cmd.undo(&mut data).unwrap();
        assert_eq!(data, before);
    }

    #[test]
    fn test_existing_false_ignores_value() {
        let mut data = create_test_data();
        let mut cmd = EditCommand::new(0, 5, false, 7.0);
        cmd.execute(&mut data).unwrap();
        assert_eq!(value(&data, 0, 5), None);
    }

    #[test]
    fn test_undo_without_execute_fails() {
        let mut data = create_test_data();
        let mut cmd = EditCommand::set(0, 5, 2.0);

        let result = cmd.undo(&mut data);
        assert!(matches!(result, Err(CommandError::UndoFailed(_))));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "executed twice")]
    fn test_double_execute_asserts() {
        let mut data = create_test_data();
        let mut cmd = EditCommand::set(0, 5, 2.0);
        cmd.execute(&mut data).unwrap();
        let _ = cmd.execute(&mut data);
    }

    #[test]
    fn test_bad_track_propagates() {
        let mut data = create_test_data();
        let mut cmd = EditCommand::set(9, 0, 1.0);

        let result = cmd.execute(&mut data);
        assert_eq!(
            result,
            Err(CommandError::Track(TrackError::NoSuchTrack { index: 9, count: 2 }))
        );
        assert!(!cmd.is_applied());
    }

    #[test]
    fn test_multi_same_row_undoes_in_reverse() {
        let mut data = create_test_data();
        let mut group = MultiCommand::new();
        group.add(EditCommand::set(0, 5, 2.0));
        group.add(EditCommand::set(0, 5, 3.0));

        group.execute(&mut data).unwrap();
        assert_eq!(value(&data, 0, 5), Some(3.0));

        group.undo(&mut data).unwrap();
        assert_eq!(value(&data, 0, 5), None);
    }

    #[test]
    fn test_multi_rolls_back_on_failure() {
        let mut data = create_test_data();
        let before = data.clone();

        let mut group = MultiCommand::new();
        group.add(EditCommand::set(0, 1, 1.0));
        group.add(EditCommand::set(1, 1, 1.0));
        group.add(EditCommand::set(5, 1, 1.0));

        let result = group.execute(&mut data);
        assert!(matches!(result, Err(CommandError::Track(_))));
        assert_eq!(data, before);
    }

    #[test]
    fn test_multi_undo_failure_reapplies_undone_steps() {
        let mut data = create_test_data();
        let mut group = MultiCommand::new();
        group.add(EditCommand::set(1, 0, 1.0));
        group.add(EditCommand::set(0, 0, 2.0));
        group.execute(&mut data).unwrap();

        // Track 1 is missing here, so the first sub-command cannot undo
        let mut partial = SyncData::new();
        partial.create_track("camera:x");
        partial.track_mut(0).unwrap().set_key_frame(0, 2.0);

        let result = group.undo(&mut partial);
        assert!(matches!(result, Err(CommandError::Track(_))));
        assert_eq!(value(&partial, 0, 0), Some(2.0));

        // Nothing was consumed: the group still undoes cleanly
        group.undo(&mut data).unwrap();
        assert!(data.track(0).unwrap().is_empty());
        assert!(data.track(1).unwrap().is_empty());
    }

    #[test]
    fn test_rollback_failures_are_reported() {
        let cause = CommandError::Track(TrackError::NoSuchTrack { index: 4, count: 2 });

        assert_eq!(with_rollback_failures(cause.clone(), Vec::new()), cause);

        let failures = vec!["'Delete track 0 row 1': boom".to_string()];
        let err = with_rollback_failures(cause.clone(), failures);
        assert_eq!(
            err,
            CommandError::RollbackFailed {
                cause: Box::new(cause),
                rollback: "'Delete track 0 row 1': boom".into(),
            }
        );
        assert!(err.to_string().contains("left partially edited"));
    }

    #[test]
    fn test_nested_multi() {
        let mut data = create_test_data();

        let mut inner = MultiCommand::new();
        inner.add(EditCommand::set(1, 0, 1.0));
        inner.add(EditCommand::set(1, 4, 2.0));

        let mut outer = MultiCommand::with_description("Paste block");
        outer.add(EditCommand::set(0, 0, 5.0));
        outer.add(inner);

        outer.execute(&mut data).unwrap();
        assert_eq!(data.track(1).unwrap().len(), 2);
        assert_eq!(value(&data, 0, 0), Some(5.0));

        outer.undo(&mut data).unwrap();
        assert!(data.track(0).unwrap().is_empty());
        assert!(data.track(1).unwrap().is_empty());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            EditCommand::set(0, 5, 2.0).description(),
            "Set track 0 row 5 to 2.00"
        );
        assert_eq!(EditCommand::delete(1, 3).description(), "Delete track 1 row 3");

        let mut group = MultiCommand::new();
        group.add(EditCommand::set(0, 0, 1.0));
        group.add(EditCommand::set(0, 1, 1.0));
        assert_eq!(group.description(), "2 edits");
        assert_eq!(
            SyncCommand::from(MultiCommand::with_description("Paste")).description(),
            "Paste"
        );
    }
}
