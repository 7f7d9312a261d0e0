//! Persistence Bridge
//!
//! Reads and writes the task list and theme as two whole-value snapshots.
//! Reads that find garbage fall back to "absent"; the first failed write
//! switches the bridge to memory-only mode for the rest of the session.

use std::collections::HashSet;

use tracing::{debug, error, warn};

use crate::config::StorageKeys;
use crate::domain::{DomainError, DomainResult, Entity, Task, TaskId, Theme};
use super::traits::KeyValueStore;

pub struct PersistenceBridge<S: KeyValueStore> {
    storage: S,
    keys: StorageKeys,
    memory_only: bool,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            memory_only: false,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True once a write has failed; later saves are skipped
    pub fn is_memory_only(&self) -> bool {
        self.memory_only
    }

    /// Load the saved task list, treating missing or corrupt data as absent.
    /// The stored value is left in place until the next save replaces it.
    pub fn load_tasks(&self) -> Option<Vec<Task>> {
        match self.load_tasks_checked() {
            Ok(tasks) => tasks,
            Err(error) => {
                error!(
                    %error,
                    key = %self.keys.tasks,
                    "discarding stored task list, it will be overwritten on the next change"
                );
                None
            }
        }
    }

    /// Load the saved task list, surfacing corruption as an error
    pub fn load_tasks_checked(&self) -> DomainResult<Option<Vec<Task>>> {
        let Some(raw) = self.storage.get(&self.keys.tasks)? else {
            return Ok(None);
        };
        let tasks: Vec<Task> = serde_json::from_str(&raw)?;
        validate_tasks(&tasks)?;
        Ok(Some(tasks))
    }

    /// Load the saved theme; unknown values are treated as absent
    pub fn load_theme(&self) -> Option<Theme> {
        let raw = match self.storage.get(&self.keys.theme) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                warn!(%error, key = %self.keys.theme, "failed reading theme");
                return None;
            }
        };
        let raw = raw.trim();
        // Bare `dark` is the canonical form; a JSON string `"dark"` is accepted too.
        let parsed = raw
            .parse::<Theme>()
            .ok()
            .or_else(|| serde_json::from_str::<Theme>(raw).ok());
        if parsed.is_none() {
            warn!(value = raw, key = %self.keys.theme, "ignoring unknown stored theme");
        }
        parsed
    }

    /// Overwrite the stored task list with a full snapshot
    pub fn save_tasks(&mut self, tasks: &[Task]) {
        match serde_json::to_string(tasks) {
            Ok(json) => {
                let key = self.keys.tasks.clone();
                self.write(&key, &json);
            }
            Err(error) => warn!(%error, "failed serializing task list"),
        }
    }

    /// Overwrite the stored theme
    pub fn save_theme(&mut self, theme: Theme) {
        let key = self.keys.theme.clone();
        self.write(&key, theme.as_str());
    }

    fn write(&mut self, key: &str, value: &str) {
        if self.memory_only {
            debug!(key, "memory-only mode, skipping save");
            return;
        }
        if let Err(error) = self.storage.set(key, value) {
            warn!(%error, key, "save failed, continuing in memory-only mode");
            self.memory_only = true;
        }
    }
}

/// Reject duplicate ids, ids a JS number cannot hold exactly, and blank texts
fn validate_tasks(tasks: &[Task]) -> DomainResult<()> {
    let total = tasks.len();
    let mut seen = HashSet::with_capacity(total);
    for task in tasks {
        let id = task.id();
        let problem = if id > TaskId::MAX {
            format!("task id {} is out of range", id)
        } else if !seen.insert(id) {
            format!("duplicate task id {}", id)
        } else if task.text.trim().is_empty() {
            format!("task {} has blank text", id)
        } else {
            continue;
        };
        return Err(DomainError::Corrupt(format!("{} ({} records)", problem, total)));
    }
    Ok(())
}
