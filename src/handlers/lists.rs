//! List handlers: create and delete whole lists

use crate::ListStore;
use crate::storage::PersistenceAdapter;
use crate::todo::ListId;
use crate::validation::non_blank;
use anyhow::Result;

impl<P: PersistenceAdapter> ListStore<P> {
    /// Create a new empty list at the end of the collection
    ///
    /// # Returns
    /// The new list's ID, or `None` if the name was blank or no unused ID
    /// is left above the highest one held
    pub fn create_list(&mut self, name: &str) -> Result<Option<ListId>> {
        if non_blank(name).is_none() {
            return Ok(None);
        }

        let Some(id) = self.next_list_id() else {
            log::warn!("No list ID left above the highest in use, list not created");
            return Ok(None);
        };
        let next = self.collection.create_list(id, name);
        self.commit(next, "create list")?;
        log::info!("Created list {} ({})", id, name.trim());
        Ok(Some(id))
    }

    /// Delete a list together with all of its tasks
    pub fn delete_list(&mut self, list_id: ListId) -> Result<()> {
        let next = self.collection.delete_list(list_id);
        if self.cursor.as_ref().is_some_and(|c| c.list_id == list_id) {
            self.cursor = None;
        }
        self.commit(next, "delete list")
    }
}
