//! Todo Core
//!
//! Layered, UI-framework-agnostic state model:
//! - domain: Task, Filter, Theme, ids and the pure derived views
//! - repository: key-value storage and the persistence bridge
//! - store: the ordered task sequence
//! - controller: single owner of app state, with subscriptions

pub mod config;
pub mod domain;
pub mod repository;
pub mod store;
pub mod controller;

pub use config::{AppConfig, StorageKeys};
pub use controller::{AppState, StateSnapshot, SubscriptionId, TodoController};
pub use domain::{
    active_count, all_completed, filtered_view, items_left_label, Clock, DomainError,
    DomainResult, Filter, FixedClock, StorageError, StorageResult, SystemClock, Task, TaskId,
    Theme,
};
pub use repository::{KeyValueStore, MemoryStore, PersistenceBridge};
pub use store::TaskStore;
