use serde::{Deserialize, Serialize};

/// A single task within a list
///
/// Tasks have no identity of their own; they are addressed by their
/// position inside the owning list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Task text, always stored trimmed
    pub text: String,
    /// Whether the task has been completed
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Return a copy of this task with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            text: self.text.clone(),
            completed: !self.completed,
        }
    }

    /// Return a copy of this task carrying new text
    pub fn renamed(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: self.completed,
        }
    }
}
