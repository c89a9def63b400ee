//! Object store implementations for the hoplink URL shortener.
//!
//! Two bindings of the [`ObjectStore`](hoplink_core::ObjectStore) trait:
//! an in-memory store for tests and local runs, and a filesystem store
//! that keeps one file per object under a bucket directory.

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::InMemoryStore;
