//! Task handlers: compose, add, toggle and remove tasks

use crate::ListStore;
use crate::storage::PersistenceAdapter;
use crate::todo::ListId;
use anyhow::Result;

impl<P: PersistenceAdapter> ListStore<P> {
    /// Replace the text being typed into a list's task input
    ///
    /// This is transient typing state and is not saved on its own; it is
    /// written along with the next change that does get saved.
    pub fn set_pending_input(&mut self, list_id: ListId, text: &str) {
        let next = self.collection.set_pending_input(list_id, text);
        self.replace(next);
    }

    /// Add the list's pending input as a new task
    pub fn add_task(&mut self, list_id: ListId) -> Result<()> {
        let next = self.collection.add_task(list_id);
        self.commit(next, "add task")
    }

    /// Flip a task between done and not done
    pub fn toggle_task(&mut self, list_id: ListId, task_index: usize) -> Result<()> {
        let next = self.collection.toggle_task(list_id, task_index);
        self.commit(next, "toggle task")
    }

    /// Remove a task, applying the store's removal policy to its list
    ///
    /// An edit in progress on the same list is dropped, since the positions
    /// it refers to shift.
    pub fn remove_task(&mut self, list_id: ListId, task_index: usize) -> Result<()> {
        let next = self
            .collection
            .remove_task(list_id, task_index, self.policy);
        if next != self.collection && self.cursor.as_ref().is_some_and(|c| c.list_id == list_id) {
            self.cursor = None;
        }
        self.commit(next, "remove task")
    }
}
