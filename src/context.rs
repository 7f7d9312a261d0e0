//! Application Context
//!
//! Shared handle provided via Leptos Context API. All mutations go through
//! here to the controller; the store is refreshed by its subscription.

use leptos::prelude::*;
use todo_core::{Filter, KeyValueStore, TaskId, TodoController};

use crate::store::AppStore;

pub type Controller = TodoController<Box<dyn KeyValueStore>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owner of the task list, theme and filter
    controller: StoredValue<Controller, LocalStorage>,
    /// Rendered state - read only for components
    pub store: AppStore,
}

impl AppContext {
    pub fn new(controller: Controller, store: AppStore) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            store,
        }
    }

    /// Add a task; false when the text was blank
    pub fn add(&self, text: &str) -> bool {
        let mut added = false;
        self.controller.update_value(|c| added = c.add(text).is_some());
        added
    }

    pub fn toggle(&self, id: TaskId) {
        self.controller.update_value(|c| {
            c.toggle(id);
        });
    }

    pub fn remove(&self, id: TaskId) {
        self.controller.update_value(|c| {
            c.remove(id);
        });
    }

    pub fn clear_completed(&self) {
        self.controller.update_value(|c| {
            c.clear_completed();
        });
    }

    pub fn toggle_all(&self) {
        self.controller.update_value(|c| {
            c.toggle_all();
        });
    }

    pub fn toggle_theme(&self) {
        self.controller.update_value(|c| {
            c.toggle_theme();
        });
    }

    pub fn set_filter(&self, filter: Filter) {
        self.controller.update_value(|c| c.set_filter(filter));
    }
}
