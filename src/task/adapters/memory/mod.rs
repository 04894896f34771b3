//! In-memory adapters for task planning.

mod task;

pub use task::InMemoryTaskRepository;
