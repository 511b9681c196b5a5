//! AWS-oriented adapters and handler for the lucky-draw endpoint.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! object-store adapter, and the snapshot load/save policy) and leaves the
//! draw engine and contracts to `lucky_draw_core`.

pub mod adapters;
pub mod handlers;
