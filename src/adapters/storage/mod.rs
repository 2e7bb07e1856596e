//! Storage adapters implementing the `SnapshotStore` port.

mod in_memory_snapshot_store;
mod json_snapshot_store;

pub use in_memory_snapshot_store::InMemorySnapshotStore;
pub use json_snapshot_store::JsonSnapshotStore;
