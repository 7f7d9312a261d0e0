//! Application configuration
//!
//! Storage key names and the seed list used when nothing has been saved yet.

use crate::domain::Task;

pub const TASKS_KEY: &str = "react-todo-todos";
pub const THEME_KEY: &str = "react-todo-theme";

/// Names of the two persisted entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: TASKS_KEY.to_string(),
            theme: THEME_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub keys: StorageKeys,
    /// Initial tasks when storage holds no (valid) task list
    pub seed: Vec<Task>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            seed: default_seed(),
        }
    }
}

impl AppConfig {
    /// Default keys, no seed tasks
    pub fn empty_seed() -> Self {
        Self {
            seed: Vec::new(),
            ..Default::default()
        }
    }
}

/// The built-in starter list
pub fn default_seed() -> Vec<Task> {
    vec![
        Task::new(1, "Complete online JavaScript course").with_completed(true),
        Task::new(2, "Jog around the park 3x"),
        Task::new(3, "10 minutes meditation"),
        Task::new(4, "Read for 1 hour"),
        Task::new(5, "Pick up groceries"),
        Task::new(6, "Complete Todo App challenge"),
    ]
}
