use thiserror::Error;

/// Input validation failures. None of them are fatal; the list is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Please enter a task.")]
    EmptyTitle,

    #[error("Date must be in YYYY-MM-DD format (got '{0}').")]
    InvalidDate(String),

    #[error("Invalid task number {index} (have {len} task(s)).")]
    InvalidIndex { index: i64, len: usize },

    #[error("'{0}' is not a number.")]
    NotANumber(String),

    #[error("No task selected.")]
    NoSelection,

    #[error("Nothing to undo.")]
    NothingToUndo,

    #[error("Nothing removed: '{0}' is no longer in the list.")]
    UndoTargetMissing(String),

    #[error("No upcoming tasks.")]
    NoPendingTasks,
}
