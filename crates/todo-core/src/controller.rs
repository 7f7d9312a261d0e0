//! Application Controller
//!
//! Single owner of the application state. The rendering layer calls the
//! methods here and is told about changes through subscriptions; it never
//! touches the task list directly.

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::domain::{
    active_count, all_completed, filtered_view, items_left_label, Clock, Filter, Task, TaskId,
    Theme,
};
use crate::repository::{KeyValueStore, PersistenceBridge};
use crate::store::TaskStore;

/// Everything the UI needs to render
#[derive(Debug)]
pub struct AppState {
    pub tasks: TaskStore,
    pub theme: Theme,
    pub filter: Filter,
}

/// Owned copy of the state handed to subscribers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
    pub tasks: Vec<Task>,
    pub theme: Theme,
    pub filter: Filter,
}

impl StateSnapshot {
    pub fn visible(&self) -> Vec<&Task> {
        filtered_view(&self.tasks, self.filter)
    }

    pub fn active_count(&self) -> usize {
        active_count(&self.tasks)
    }

    pub fn all_completed(&self) -> bool {
        all_completed(&self.tasks)
    }

    pub fn items_left_label(&self) -> String {
        items_left_label(self.active_count())
    }
}

/// Handle returned by [`TodoController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StateSnapshot)>;

pub struct TodoController<S: KeyValueStore> {
    state: AppState,
    bridge: PersistenceBridge<S>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> TodoController<S> {
    /// Build the controller from whatever storage holds, falling back to
    /// the configured seed list and the light theme
    pub fn load(storage: S, clock: impl Clock + 'static, config: AppConfig) -> Self {
        let bridge = PersistenceBridge::new(storage, config.keys);

        let (tasks, restored) = match bridge.load_tasks() {
            Some(tasks) => (tasks, true),
            None => (config.seed, false),
        };
        let theme = bridge.load_theme().unwrap_or_default();

        info!(count = tasks.len(), restored, %theme, "loaded todo state");

        Self {
            state: AppState {
                tasks: TaskStore::with_tasks(tasks, clock),
                theme,
                filter: Filter::default(),
            },
            bridge,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn bridge(&self) -> &PersistenceBridge<S> {
        &self.bridge
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            tasks: self.state.tasks.tasks().to_vec(),
            theme: self.state.theme,
            filter: self.state.filter,
        }
    }

    // ========================
    // Subscriptions
    // ========================

    pub fn subscribe(&mut self, callback: impl FnMut(&StateSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&snapshot);
        }
    }

    /// Save the full task list, then notify
    fn commit_tasks(&mut self) {
        self.bridge.save_tasks(self.state.tasks.tasks());
        self.notify();
    }

    // ========================
    // Task operations
    // ========================

    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let id = self.state.tasks.add(text)?;
        debug!(%id, "added task");
        self.commit_tasks();
        Some(id)
    }

    pub fn toggle(&mut self, id: TaskId) -> bool {
        let changed = self.state.tasks.toggle(id);
        debug!(%id, changed, "toggled task");
        self.commit_tasks();
        changed
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let changed = self.state.tasks.remove(id);
        debug!(%id, changed, "removed task");
        self.commit_tasks();
        changed
    }

    pub fn clear_completed(&mut self) -> usize {
        let removed = self.state.tasks.clear_completed();
        debug!(removed, "cleared completed tasks");
        self.commit_tasks();
        removed
    }

    pub fn toggle_all(&mut self) -> bool {
        let changed = self.state.tasks.toggle_all();
        debug!(changed, "toggled all tasks");
        self.commit_tasks();
        changed
    }

    // ========================
    // View state
    // ========================

    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.state.theme.toggled();
        debug!(theme = %self.state.theme, "toggled theme");
        self.bridge.save_theme(self.state.theme);
        self.notify();
        self.state.theme
    }

    /// Change the visible subset; never persisted
    pub fn set_filter(&mut self, filter: Filter) {
        if self.state.filter == filter {
            return;
        }
        self.state.filter = filter;
        self.notify();
    }
}
