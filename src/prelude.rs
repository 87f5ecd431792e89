//! Prelude module for range_calendar crate.
//!
//! Re-exports the derive_more display derive.

pub use derive_more::Display;
