//! Prelude module for `uct_converter`.
//!
//! Re-exports the `derive_more` macros used across the crate.

pub use derive_more::Display;
