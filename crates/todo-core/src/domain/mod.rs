//! Domain Layer
//!
//! Entities, value types and the pure functions derived from them.
//! This layer has NO storage or UI dependencies.

mod entity;
mod task;
mod filter;
mod theme;
mod id;

pub use entity::{Entity, DomainError, DomainResult, StorageError, StorageResult};
pub use task::{Task, TaskId};
pub use filter::{Filter, filtered_view, active_count, all_completed, items_left_label};
pub use theme::Theme;
pub use id::{Clock, SystemClock, FixedClock, IdGenerator};
