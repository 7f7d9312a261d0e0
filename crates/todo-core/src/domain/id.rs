//! Time-based task id generation
//!
//! Ids start from the wall clock in milliseconds and are bumped past the
//! last issued id and past any id already held by the store, so they are
//! strictly increasing even when the clock stalls or goes backwards.

use std::cell::Cell;

use super::task::TaskId;

/// Source of wall-clock milliseconds
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Host clock backed by chrono
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Clock frozen at a settable instant
#[derive(Debug, Default)]
pub struct FixedClock(Cell<u64>);

impl FixedClock {
    pub fn new(millis: u64) -> Self {
        Self(Cell::new(millis))
    }

    pub fn set(&self, millis: u64) {
        self.0.set(millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Issues unique, monotonically increasing task ids
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: u64,
}

impl IdGenerator {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: 0,
        }
    }

    /// Next id, greater than `floor` and every id issued before.
    /// `None` once ids would pass [`TaskId::MAX`].
    pub fn next_after(&mut self, floor: Option<TaskId>) -> Option<TaskId> {
        let floor = floor.map(TaskId::get).unwrap_or(0);
        let candidate = self
            .clock
            .now_millis()
            .max(self.last.checked_add(1)?)
            .max(floor.checked_add(1)?);
        if candidate > TaskId::MAX.get() {
            return None;
        }
        self.last = candidate;
        Some(TaskId(candidate))
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").field("last", &self.last).finish()
    }
}
