//! Common test utilities for integration tests

#![allow(dead_code)]

use tempfile::NamedTempFile;
use todo_lists::{FileStorage, ListId, ListStore, RemovalPolicy};

/// Create a test store backed by a temporary file
pub fn get_test_store(policy: RemovalPolicy) -> (ListStore<FileStorage>, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let store = ListStore::open(FileStorage::new(temp_file.path()), policy);
    (store, temp_file)
}

/// Open a second store over the same file, as a new session would
pub fn reopen(temp_file: &NamedTempFile, policy: RemovalPolicy) -> ListStore<FileStorage> {
    ListStore::open(FileStorage::new(temp_file.path()), policy)
}

/// Create a list and fill it with the given tasks
pub fn create_list_with_tasks(
    store: &mut ListStore<FileStorage>,
    name: &str,
    tasks: &[&str],
) -> ListId {
    let id = store.create_list(name).unwrap().unwrap();
    for text in tasks {
        store.set_pending_input(id, text);
        store.add_task(id).unwrap();
    }
    id
}
