//! Persistence adapters for the list collection
//!
//! The whole collection is stored as one record under the fixed key
//! [`STORAGE_KEY`] inside a TOML document. `FileStorage` keeps that document
//! on disk; `MemoryStorage` keeps it in process.

use crate::todo::{Collection, ListId, TodoList};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which the collection is stored
pub const STORAGE_KEY: &str = "todoLists";

/// Errors raised while loading or saving the collection
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Stored data is not a valid collection: {0}")]
    Corrupt(#[from] toml::de::Error),

    #[error("Stored data holds list ID {0} more than once")]
    DuplicateListId(ListId),

    #[error("Failed to encode collection: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Load/save contract between the list store and its backing storage
pub trait PersistenceAdapter {
    /// Load the stored collection; nothing stored yet loads as empty
    fn load(&self) -> Result<Collection, StorageError>;

    /// Replace the stored collection
    fn save(&self, collection: &Collection) -> Result<(), StorageError>;
}

/// On-disk document shape: the collection under its fixed key
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredDocument {
    #[serde(rename = "todoLists")]
    todo_lists: Vec<TodoList>,
}

/// Decode a stored document into a collection
///
/// Empty input decodes as an empty collection. Every list must carry an
/// `id` and no two lists may share one.
pub fn decode(content: &str) -> Result<Collection, StorageError> {
    let document: StoredDocument = toml::from_str(content)?;

    let mut seen = HashSet::new();
    if let Some(list) = document.todo_lists.iter().find(|l| !seen.insert(l.id)) {
        return Err(StorageError::DuplicateListId(list.id));
    }
    Ok(Collection::from(document.todo_lists))
}

/// Encode a collection as a stored document
pub fn encode(collection: &Collection) -> Result<String, StorageError> {
    let document = StoredDocument {
        todo_lists: collection.lists().to_vec(),
    };
    Ok(toml::to_string_pretty(&document)?)
}

/// TOML file storage
pub struct FileStorage {
    file_path: PathBuf,
}

impl FileStorage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}

impl PersistenceAdapter for FileStorage {
    fn load(&self) -> Result<Collection, StorageError> {
        if !self.file_path.exists() {
            return Ok(Collection::new());
        }

        let content = fs::read_to_string(&self.file_path).map_err(|e| self.io_error(e))?;
        decode(&content)
    }

    fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        let content = encode(collection)?;
        fs::write(&self.file_path, content).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

/// In-process storage holding the same document text a file would
#[derive(Debug, Default)]
pub struct MemoryStorage {
    content: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-filled with raw document text
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(content.into())),
        }
    }

    /// Raw document text last written, if any
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl PersistenceAdapter for MemoryStorage {
    fn load(&self) -> Result<Collection, StorageError> {
        match self.content.borrow().as_deref() {
            Some(content) => decode(content),
            None => Ok(Collection::new()),
        }
    }

    fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        let content = encode(collection)?;
        *self.content.borrow_mut() = Some(content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_decodes_as_empty_collection() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_encoded_document_uses_storage_key() {
        let c = Collection::new().create_list(7, "Home");
        let text = encode(&c).unwrap();
        assert!(text.contains(STORAGE_KEY));
        assert!(text.contains("pendingInputText"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode("todoLists = [ { id = ");
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_decode_accepts_legacy_pending_field() {
        let text = r#"
[[todoLists]]
id = 1700000000000
name = "Groceries"
tasks = []
newTaskText = "Bread"
"#;
        let c = decode(text).unwrap();
        assert_eq!(c.lists()[0].pending_input_text, "Bread");
    }

    #[test]
    fn test_decode_rejects_list_without_id() {
        let text = "[[todoLists]]\nname = \"A\"\n";
        assert!(matches!(decode(text), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let text = "[[todoLists]]\nid = 5\nname = \"A\"\n\n[[todoLists]]\nid = 5\nname = \"B\"\n";
        assert!(matches!(
            decode(text),
            Err(StorageError::DuplicateListId(5))
        ));
    }

    #[test]
    fn test_memory_storage_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.content().is_none());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        let c = Collection::new()
            .create_list(1, "Groceries")
            .set_pending_input(1, "Milk")
            .add_task(1)
            .toggle_task(1, 0)
            .set_pending_input(1, "half typed");
        storage.save(&c).unwrap();
        assert_eq!(storage.load().unwrap(), c);
    }
}
