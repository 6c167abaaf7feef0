use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Task ID {id} does not exist in schedule '{schedule}'.")]
    TaskNotFound { id: TaskId, schedule: String },

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(String),

    #[error("Schedule '{0}' is empty.")]
    EmptySchedule(String),
}
