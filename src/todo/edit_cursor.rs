use super::todo_list::ListId;

/// Pointer to the single task currently being renamed, plus its draft text
///
/// The cursor refers to its task by list id and position only. The task may
/// be gone by the time the edit is saved, so every use revalidates it
/// against the current collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub list_id: ListId,
    pub task_index: usize,
    pub draft: String,
}

impl EditCursor {
    pub fn new(list_id: ListId, task_index: usize, draft: impl Into<String>) -> Self {
        Self {
            list_id,
            task_index,
            draft: draft.into(),
        }
    }

    /// Whether this cursor points at the given task
    pub fn targets(&self, list_id: ListId, task_index: usize) -> bool {
        self.list_id == list_id && self.task_index == task_index
    }
}
