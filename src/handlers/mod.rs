//! User action handlers for the list store
//!
//! Each file adds one group of operations to `ListStore`.

pub mod edit;
pub mod lists;
pub mod tasks;
