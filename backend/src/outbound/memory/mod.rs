//! In-process adapters holding state in memory.

mod in_memory_preference_store;

pub use in_memory_preference_store::InMemoryPreferenceStore;
