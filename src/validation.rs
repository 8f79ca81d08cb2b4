//! Input validation helpers
//!
//! The only validation the to-do store performs is rejecting text that is
//! empty once surrounding whitespace is removed.

/// Return the trimmed text, or `None` if nothing is left after trimming
///
/// # Arguments
/// * `text` - Raw user input
///
/// # Examples
/// ```
/// # use todo_lists::validation::non_blank;
/// assert_eq!(non_blank("  Milk 2% "), Some("Milk 2%"));
/// assert_eq!(non_blank(" \t\n"), None);
/// ```
pub fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
