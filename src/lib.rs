//! To-do List Library
//!
//! This library manages named to-do lists whose tasks can be added,
//! completed, renamed inline and removed. The whole set of lists is
//! persisted after every change.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Store Layer**: `ListStore` - Owns the state and runs each user action
//! - **Domain Layer**: `todo` module - Data models and pure state transitions
//! - **Persistence Layer**: `storage` module - TOML storage behind `PersistenceAdapter`
//!
//! # Example
//!
//! ```no_run
//! use todo_lists::{FileStorage, ListStore, RemovalPolicy};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut store = ListStore::open(FileStorage::new("todo-lists.toml"), RemovalPolicy::default());
//!     if let Some(id) = store.create_list("Groceries")? {
//!         store.set_pending_input(id, "Milk");
//!         store.add_task(id)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod formatting;
mod handlers;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::{Context, Result};
use log::{debug, info, warn};

// Re-export commonly used types
pub use config::Config;
pub use storage::{FileStorage, MemoryStorage, PersistenceAdapter, StorageError};
pub use todo::{Collection, EditCursor, ListId, RemovalPolicy, Task, TodoList};

/// Current time as a list ID (milliseconds since the Unix epoch)
pub fn timestamp_id() -> ListId {
    chrono::Utc::now().timestamp_millis()
}

/// Owner of the list collection and the edit cursor
///
/// Every user action derives a new collection from the current one, swaps
/// it in and, when anything changed, writes it through the storage
/// adapter. Stored data is read exactly once, in [`ListStore::open`].
pub struct ListStore<P: PersistenceAdapter> {
    pub(crate) collection: Collection,
    pub(crate) cursor: Option<EditCursor>,
    pub(crate) policy: RemovalPolicy,
    last_issued_id: Option<ListId>,
    storage: P,
}

impl<P: PersistenceAdapter> ListStore<P> {
    /// Open a store over the given storage
    ///
    /// Stored data that cannot be read or parsed is logged and replaced by
    /// an empty collection; opening never fails.
    ///
    /// # Arguments
    /// * `storage` - Adapter used to load once and to save after each change
    /// * `policy` - What removing a list's last task does to the list
    pub fn open(storage: P, policy: RemovalPolicy) -> Self {
        let collection = match storage.load() {
            Ok(collection) => collection,
            Err(e) => {
                warn!("Could not load stored lists, starting empty: {}", e);
                Collection::new()
            }
        };
        info!("Opened store with {} list(s)", collection.len());

        Self {
            collection,
            cursor: None,
            policy,
            last_issued_id: None,
            storage,
        }
    }

    /// The current collection
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// All lists in display order
    pub fn lists(&self) -> &[TodoList] {
        self.collection.lists()
    }

    /// Find a list by its ID
    pub fn find_list(&self, id: ListId) -> Option<&TodoList> {
        self.collection.find_list(id)
    }

    /// The active edit cursor, if a task is being renamed
    pub fn edit_cursor(&self) -> Option<&EditCursor> {
        self.cursor.as_ref()
    }

    /// Whether the given task is the one being renamed
    pub fn is_editing(&self, list_id: ListId, task_index: usize) -> bool {
        self.cursor
            .as_ref()
            .is_some_and(|c| c.targets(list_id, task_index))
    }

    /// The removal policy this store was opened with
    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// The storage adapter the store saves through
    pub fn storage(&self) -> &P {
        &self.storage
    }

    /// Allocate an ID for a new list
    ///
    /// IDs follow the clock but always exceed every ID held or issued
    /// before, so two lists created within the same millisecond still differ.
    /// Returns `None` once the highest ID in use is `ListId::MAX`.
    pub(crate) fn next_list_id(&mut self) -> Option<ListId> {
        let highest = self
            .collection
            .max_id()
            .into_iter()
            .chain(self.last_issued_id)
            .max();
        let floor = match highest {
            Some(id) => id.checked_add(1)?,
            None => ListId::MIN,
        };
        let id = timestamp_id().max(floor);
        self.last_issued_id = Some(id);
        Some(id)
    }

    /// Swap in a new collection without persisting it
    pub(crate) fn replace(&mut self, next: Collection) {
        self.collection = next;
    }

    /// Swap in a new collection and persist it
    ///
    /// Saves even when `next` equals the current collection, since the
    /// current one may hold unsaved pending input. The in-memory collection
    /// is updated even when saving fails.
    pub(crate) fn commit(&mut self, next: Collection, action: &str) -> Result<()> {
        self.collection = next;
        self.storage
            .save(&self.collection)
            .with_context(|| format!("Failed to save lists after {}", action))?;
        debug!("{}: saved {} list(s)", action, self.collection.len());
        Ok(())
    }
}
