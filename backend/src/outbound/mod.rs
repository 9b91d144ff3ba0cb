//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local preference store guarded by a lock.
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business logic.

pub mod memory;
