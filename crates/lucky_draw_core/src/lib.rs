//! Shared lucky-draw domain primitives.
//!
//! This crate owns the stock data model, the weighted non-replacement draw
//! engine, and the request/response contracts. It intentionally excludes AWS
//! SDK and Lambda runtime concerns; those live in `lucky_draw_lambda`.

pub mod contract;
pub mod engine;
pub mod stock;
pub mod storage_keys;
