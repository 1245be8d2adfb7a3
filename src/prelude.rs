//! Prelude module for month_parts crate.
//!
//! Re-exports the derive macros from derive_more used by the value types.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
