use super::task::Task;
use serde::{Deserialize, Serialize};

/// Identifier of a list: the creation timestamp in milliseconds
pub type ListId = i64;

/// A named, ordered list of tasks
///
/// Field names are serialized in camelCase to match the stored record shape
/// (`id`, `name`, `tasks`, `pendingInputText`). Only `id` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    /// Unique identifier, assigned once at creation
    pub id: ListId,
    /// Display name, stored as entered
    #[serde(default)]
    pub name: String,
    /// Tasks in display order
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Text typed into the list's task input but not yet added
    ///
    /// Older records call this field `newTaskText`.
    #[serde(default, alias = "newTaskText")]
    pub pending_input_text: String,
}

impl TodoList {
    /// Create a new empty list
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks: Vec::new(),
            pending_input_text: String::new(),
        }
    }

    /// Get the task at a position, if it exists
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Count completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Whether the list holds no tasks and no pending input
    pub fn is_blank(&self) -> bool {
        self.tasks.is_empty() && self.pending_input_text.trim().is_empty()
    }
}
