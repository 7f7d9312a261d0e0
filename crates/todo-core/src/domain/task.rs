//! Task Entity
//!
//! One user-visible to-do item. Serialized as `{id, text, completed}`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Unique task identifier, stored as a bare JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Largest id a JS number holds exactly (`Number.MAX_SAFE_INTEGER`)
    pub const MAX: TaskId = TaskId((1 << 53) - 1);

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId(value)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, never reused
    pub id: TaskId,
    /// Trimmed, non-empty text
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id: TaskId(id),
            text: text.into(),
            completed: false,
        }
    }

    /// Builder-style completion flag, mostly for seed data and tests
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
