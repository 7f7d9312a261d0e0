//! Repository Layer
//!
//! Storage abstraction, the in-memory backend and the persistence bridge.

mod traits;
mod memory;
mod bridge;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use bridge::PersistenceBridge;
