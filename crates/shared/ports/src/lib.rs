//! Tempo Ports
//!
//! Port definitions (traits) for the tempo time toolkit.
//! These define the boundary between code that needs the current time
//! and whatever source provides it.

mod clock;
mod error;

pub use clock::ClockSource;
pub use error::{TimeError, TimeResult};
