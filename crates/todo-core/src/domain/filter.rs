//! View Filter
//!
//! Pure projections over the task sequence. Nothing here is cached; every
//! caller recomputes from the current tasks.

use serde::{Deserialize, Serialize};
use super::task::Task;

/// Which subset of tasks is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every mode, in button order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a task belongs to this view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Tasks visible under `filter`, in store order
pub fn filtered_view(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Number of incomplete tasks
pub fn active_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// True only for a non-empty list where every task is completed
pub fn all_completed(tasks: &[Task]) -> bool {
    !tasks.is_empty() && tasks.iter().all(|task| task.completed)
}

/// "1 item left" / "N items left"
pub fn items_left_label(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} left", count, noun)
}
