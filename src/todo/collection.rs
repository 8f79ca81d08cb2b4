use super::task::Task;
use super::todo_list::{ListId, TodoList};
use crate::validation::non_blank;
use serde::{Deserialize, Serialize};

/// What happens to a list when its last task is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// The list stays, with zero tasks
    #[default]
    KeepEmptyLists,
    /// The list is deleted, unless its pending input holds text
    PruneEmptyLists,
}

/// The ordered set of all lists
///
/// Every transition borrows the current collection and returns a new one;
/// nothing here mutates in place. References to lists or tasks that no
/// longer exist leave the collection unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    lists: Vec<TodoList>,
}

impl From<Vec<TodoList>> for Collection {
    fn from(lists: Vec<TodoList>) -> Self {
        Self { lists }
    }
}

impl Collection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// All lists in display order
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Find a list by its ID
    pub fn find_list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Highest list ID currently held
    pub fn max_id(&self) -> Option<ListId> {
        self.lists.iter().map(|l| l.id).max()
    }

    /// Apply `f` to the list with the given ID, cloning everything else
    fn with_list<F>(&self, id: ListId, f: F) -> Self
    where
        F: FnOnce(&TodoList) -> TodoList,
    {
        let Some(pos) = self.lists.iter().position(|l| l.id == id) else {
            log::debug!("List {} not found, leaving collection unchanged", id);
            return self.clone();
        };
        let mut lists = self.lists.clone();
        lists[pos] = f(&self.lists[pos]);
        Self { lists }
    }

    /// Append a new empty list
    ///
    /// A name that is blank after trimming is ignored. The name itself is
    /// stored as entered.
    #[must_use]
    pub fn create_list(&self, id: ListId, name: &str) -> Self {
        if non_blank(name).is_none() {
            return self.clone();
        }
        let mut lists = self.lists.clone();
        lists.push(TodoList::new(id, name));
        Self { lists }
    }

    /// Replace the pending input text of a list
    #[must_use]
    pub fn set_pending_input(&self, id: ListId, text: &str) -> Self {
        self.with_list(id, |list| TodoList {
            pending_input_text: text.to_string(),
            ..list.clone()
        })
    }

    /// Turn a list's pending input into a new task
    ///
    /// Blank pending input is ignored and left as it is.
    #[must_use]
    pub fn add_task(&self, id: ListId) -> Self {
        self.with_list(id, |list| match non_blank(&list.pending_input_text) {
            Some(text) => {
                let mut tasks = list.tasks.clone();
                tasks.push(Task::new(text));
                TodoList {
                    tasks,
                    pending_input_text: String::new(),
                    ..list.clone()
                }
            }
            None => list.clone(),
        })
    }

    /// Flip the completion flag of a task
    #[must_use]
    pub fn toggle_task(&self, id: ListId, index: usize) -> Self {
        self.with_list(id, |list| TodoList {
            tasks: list
                .tasks
                .iter()
                .enumerate()
                .map(|(i, t)| if i == index { t.toggled() } else { t.clone() })
                .collect(),
            ..list.clone()
        })
    }

    /// Remove a task from a list
    ///
    /// Under `RemovalPolicy::PruneEmptyLists` the list itself is removed too
    /// when this leaves it without tasks and without pending input. Only the
    /// targeted list is ever pruned.
    #[must_use]
    pub fn remove_task(&self, id: ListId, index: usize, policy: RemovalPolicy) -> Self {
        let Some(list) = self.find_list(id) else {
            return self.clone();
        };
        if index >= list.tasks.len() {
            log::debug!("Task {} not found in list {}", index, id);
            return self.clone();
        }

        let next = self.with_list(id, |list| {
            let mut tasks = list.tasks.clone();
            tasks.remove(index);
            TodoList {
                tasks,
                ..list.clone()
            }
        });

        match policy {
            RemovalPolicy::KeepEmptyLists => next,
            RemovalPolicy::PruneEmptyLists => {
                if next.find_list(id).is_some_and(TodoList::is_blank) {
                    next.delete_list(id)
                } else {
                    next
                }
            }
        }
    }

    /// Replace the text of a task with a trimmed draft
    ///
    /// A blank draft keeps the original text.
    #[must_use]
    pub fn rename_task(&self, id: ListId, index: usize, draft: &str) -> Self {
        let Some(text) = non_blank(draft) else {
            return self.clone();
        };
        self.with_list(id, |list| TodoList {
            tasks: list
                .tasks
                .iter()
                .enumerate()
                .map(|(i, t)| if i == index { t.renamed(text) } else { t.clone() })
                .collect(),
            ..list.clone()
        })
    }

    /// Remove a list regardless of its contents
    #[must_use]
    pub fn delete_list(&self, id: ListId) -> Self {
        Self {
            lists: self.lists.iter().filter(|l| l.id != id).cloned().collect(),
        }
    }
}
