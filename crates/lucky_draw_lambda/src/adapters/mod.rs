pub mod object_store;
pub mod snapshot_store;
