//! Tempo Core
//!
//! Pure value types for the tempo time toolkit.
//! This crate contains no I/O and is 100% unit testable.

pub mod values;

// Re-export commonly used types at crate root
pub use values::{Instant, Timestamp};
