//! In-memory adapters for task lifecycle testing.

mod task;

pub use task::InMemoryTaskStore;
