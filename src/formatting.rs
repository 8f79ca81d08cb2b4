//! Plain-text rendering of the list collection

use crate::todo::{Collection, EditCursor, TodoList};

/// Format a single list with its tasks
///
/// Tasks are shown with their 0-based index. The task under the edit
/// cursor, if any, shows its draft text instead.
pub fn format_list(list: &TodoList, cursor: Option<&EditCursor>) -> String {
    let mut result = format!(
        "{} (id: {}, {}/{} done)\n",
        list.name,
        list.id,
        list.completed_count(),
        list.tasks.len()
    );

    if list.tasks.is_empty() {
        result.push_str("  (no tasks)\n");
    }
    for (index, task) in list.tasks.iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        match cursor.filter(|c| c.targets(list.id, index)) {
            Some(c) => result.push_str(&format!("  {}. [{}] {} (editing)\n", index, mark, c.draft)),
            None => result.push_str(&format!("  {}. [{}] {}\n", index, mark, task.text)),
        }
    }
    if !list.pending_input_text.is_empty() {
        result.push_str(&format!("  + {}\n", list.pending_input_text));
    }

    result
}

/// Format the whole collection for display
pub fn format_collection(collection: &Collection, cursor: Option<&EditCursor>) -> String {
    if collection.is_empty() {
        return "No lists yet".to_string();
    }

    let mut result = format!("{} list(s):\n\n", collection.len());
    for list in collection.lists() {
        result.push_str(&format_list(list, cursor));
        result.push('\n');
    }
    result
}
