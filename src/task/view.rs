//! Listing logic - filtering, ordering, and line formatting
//!
//! Pure selection over an already-loaded collection; nothing here touches
//! the store.

use super::{Priority, Task};

/// How a listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the persisted (insertion) order.
    #[default]
    Insertion,
    /// Highest priority first, oldest first within a level.
    Priority,
}

/// Display options for a listing.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Include tasks that are already done.
    pub show_all: bool,

    pub sort: SortMode,

    /// Keep only the first N entries after filtering and sorting;
    /// 0 keeps everything.
    pub limit: usize,
}

/// Select the subset and ordering of tasks to show.
pub fn select<'a>(tasks: &'a [Task], opts: &ListOptions) -> Vec<&'a Task> {
    let mut selected: Vec<&Task> = tasks
        .iter()
        .filter(|t| opts.show_all || !t.done)
        .collect();

    // Asking for the top N implies the priority ordering even when the
    // sort was not requested explicitly.
    if opts.sort == SortMode::Priority || opts.limit > 0 {
        selected.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.created.cmp(&b.created))
        });
        if opts.limit > 0 && selected.len() > opts.limit {
            selected.truncate(opts.limit);
        }
    }

    selected
}

/// Render one listing line: completion marker, id, text, priority tag.
pub fn format_line(task: &Task) -> String {
    let mark = if task.done { 'x' } else { ' ' };
    let tag = match Priority::from_value(task.priority) {
        Some(Priority::High) => " (high)",
        Some(Priority::Medium) => " (med)",
        Some(Priority::Low) => " (low)",
        None => "",
    };
    format!("[{}] {}: {}{}", mark, task.id, task.text, tag)
}
