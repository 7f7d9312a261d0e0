//! Task Store
//!
//! Ordered task sequence (most recent first) plus the id generator.
//! Every mutation reports whether it changed anything.

use tracing::warn;

use crate::domain::{Clock, Entity, IdGenerator, Task, TaskId};

#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self::with_tasks(Vec::new(), clock)
    }

    pub fn with_tasks(tasks: Vec<Task>, clock: impl Clock + 'static) -> Self {
        Self {
            tasks,
            ids: IdGenerator::new(clock),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Prepend a new task; blank text is ignored, and so is any add once
    /// ids are exhausted
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let floor = self.tasks.iter().map(Entity::id).max();
        let Some(id) = self.ids.next_after(floor) else {
            warn!(?floor, "no task ids left, ignoring add");
            return None;
        };
        self.tasks.insert(0, Task::new(id.get(), text));
        Some(id)
    }

    /// Flip completion on the matching task
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Drop every completed task, returning how many went
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    /// Complete everything, or un-complete everything if all are done.
    /// An empty store is left alone.
    pub fn toggle_all(&mut self) -> bool {
        if self.tasks.is_empty() {
            return false;
        }
        let target = !self.tasks.iter().all(|task| task.completed);
        self.tasks.iter_mut().for_each(|task| task.completed = target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use std::collections::HashSet;

    fn store() -> TaskStore {
        TaskStore::new(FixedClock::new(1_000))
    }

    #[test]
    fn test_add_prepends_trimmed() {
        let mut store = store();
        let a = store.add("  first ").unwrap();
        let b = store.add("second").unwrap();
        assert_eq!(store.tasks()[0].id, b);
        assert_eq!(store.tasks()[1].id, a);
        assert_eq!(store.tasks()[1].text, "first");
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_blank_add_is_noop() {
        let mut store = store();
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add("\t\n"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_unique_across_many_adds() {
        let mut store = store();
        let inputs = ["a", " ", "b", "", "c", "d", "  \t", "e"];
        for text in inputs {
            store.add(text);
        }
        assert_eq!(store.len(), 5);
        let ids: HashSet<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_new_ids_skip_past_loaded_ids() {
        let loaded = vec![Task::new(5_000, "loaded")];
        let mut store = TaskStore::with_tasks(loaded, FixedClock::new(10));
        let id = store.add("fresh").unwrap();
        assert_eq!(id, TaskId(5_001));
    }

    #[test]
    fn test_add_refused_when_ids_exhausted() {
        let loaded = vec![Task::new(u64::MAX, "loaded")];
        let mut store = TaskStore::with_tasks(loaded, FixedClock::new(5));
        assert_eq!(store.add("x"), None);
        assert_eq!(store.add("y"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_safe_id_is_issued_once() {
        let loaded = vec![Task::new(TaskId::MAX.get() - 1, "loaded")];
        let mut store = TaskStore::with_tasks(loaded, FixedClock::new(5));
        assert_eq!(store.add("x"), Some(TaskId::MAX));
        assert_eq!(store.add("y"), None);
        let ids: HashSet<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = store();
        let id = store.add("a").unwrap();
        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().completed);
        assert!(store.toggle(id));
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn test_remove_then_toggle_is_noop() {
        let mut store = store();
        let id = store.add("a").unwrap();
        store.add("b");
        assert!(store.remove(id));
        let snapshot = store.tasks().to_vec();
        assert!(!store.toggle(id));
        assert!(!store.remove(id));
        assert_eq!(store.tasks(), snapshot.as_slice());
    }

    #[test]
    fn test_clear_completed_idempotent() {
        let mut store = TaskStore::with_tasks(
            vec![
                Task::new(1, "A"),
                Task::new(2, "B").with_completed(true),
                Task::new(3, "C").with_completed(true),
            ],
            FixedClock::new(0),
        );
        assert_eq!(store.clear_completed(), 2);
        let once = store.tasks().to_vec();
        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.tasks(), once.as_slice());
        assert_eq!(once, vec![Task::new(1, "A")]);
    }

    #[test]
    fn test_toggle_all_twice_restores_when_all_done() {
        let original = vec![
            Task::new(1, "A").with_completed(true),
            Task::new(2, "B").with_completed(true),
        ];
        let mut store = TaskStore::with_tasks(original.clone(), FixedClock::new(0));
        store.toggle_all();
        assert!(store.tasks().iter().all(|t| !t.completed));
        store.toggle_all();
        assert_eq!(store.tasks(), original.as_slice());
    }

    #[test]
    fn test_toggle_all_mixed_completes_everything() {
        let mut store = TaskStore::with_tasks(
            vec![Task::new(1, "A"), Task::new(2, "B").with_completed(true)],
            FixedClock::new(0),
        );
        store.toggle_all();
        assert!(store.tasks().iter().all(|t| t.completed));
    }

    #[test]
    fn test_toggle_all_empty_is_noop() {
        let mut store = store();
        assert!(!store.toggle_all());
        assert!(store.is_empty());
    }
}
