//! Rendered Application State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the
//! controller's subscription writes here; components just read.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Filter, StateSnapshot, Task, Theme};

/// Snapshot of the controller state, field-level reactive
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Full task list in store order
    pub tasks: Vec<Task>,
    pub theme: Theme,
    pub filter: Filter,
}

impl From<StateSnapshot> for UiState {
    fn from(snapshot: StateSnapshot) -> Self {
        Self {
            tasks: snapshot.tasks,
            theme: snapshot.theme,
            filter: snapshot.filter,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<UiState>;

/// Copy a controller snapshot into the store
pub fn store_apply_snapshot(store: &AppStore, snapshot: &StateSnapshot) {
    *store.tasks().write() = snapshot.tasks.clone();
    if store.theme().get_untracked() != snapshot.theme {
        *store.theme().write() = snapshot.theme;
    }
    if store.filter().get_untracked() != snapshot.filter {
        *store.filter().write() = snapshot.filter;
    }
}
