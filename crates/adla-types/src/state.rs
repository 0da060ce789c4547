//! Job state model: the driver's view of a remote job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Last-observed condition of a remote job.
///
/// Not a local state machine: every poll re-derives the state from the
/// service response. `Completed`, `Failed` and `DoesNotExist` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Submitted,
    Running,
    Completed,
    Failed,
    DoesNotExist,
}

impl JobState {
    /// True when no further transition is expected for this job.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Completed | JobState::Failed | JobState::DoesNotExist
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobState::Submitted => "SUBMITTED",
            JobState::Running => "RUNNING",
            JobState::Completed => "COMPLETED",
            JobState::Failed => "FAILED",
            JobState::DoesNotExist => "DOES_NOT_EXIST",
        };
        f.write_str(s)
    }
}

/// A job state plus its diagnostic message.
///
/// The message is assembled only from recognized timing fields reported by
/// the service; it is empty when none are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub state: JobState,
    #[serde(default)]
    pub message: String,
}

impl JobStatus {
    pub fn new(state: JobState) -> Self {
        Self {
            state,
            message: String::new(),
        }
    }

    pub fn with_message(state: JobState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
        }
    }
}
