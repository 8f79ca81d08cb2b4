//! To-do domain models and state transitions
//!
//! This module contains the core data structures and the pure transitions
//! that derive a new collection from an old one:
//! - `task`: A single task with its completion flag
//! - `todo_list`: A named list of tasks with its pending input buffer
//! - `collection`: The ordered set of lists and every transition over it
//! - `edit_cursor`: The transient pointer to the task being renamed

mod collection;
mod edit_cursor;
mod task;
mod todo_list;

// Re-export all public types
pub use collection::{Collection, RemovalPolicy};
pub use edit_cursor::EditCursor;
pub use task::Task;
pub use todo_list::{ListId, TodoList};
