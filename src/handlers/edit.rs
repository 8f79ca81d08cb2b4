//! Inline edit handlers

use crate::ListStore;
use crate::storage::PersistenceAdapter;
use crate::todo::{EditCursor, ListId};
use anyhow::Result;

impl<P: PersistenceAdapter> ListStore<P> {
    /// Start renaming a task, replacing any edit already in progress
    pub fn start_edit(&mut self, list_id: ListId, task_index: usize, current_text: &str) {
        self.cursor = Some(EditCursor::new(list_id, task_index, current_text));
    }

    /// Replace the draft text of the edit in progress
    pub fn update_edit_draft(&mut self, draft: &str) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.draft = draft.to_string();
        }
    }

    /// Commit the edit in progress and clear the cursor
    ///
    /// A blank draft keeps the task's original text. If the task no longer
    /// exists the edit is dropped.
    pub fn save_edit(&mut self) -> Result<()> {
        let Some(cursor) = self.cursor.take() else {
            return Ok(());
        };

        let next = self
            .collection
            .rename_task(cursor.list_id, cursor.task_index, &cursor.draft);
        self.commit(next, "save edit")
    }

    /// Drop the edit in progress without touching any task
    pub fn cancel_edit(&mut self) {
        self.cursor = None;
    }
}
