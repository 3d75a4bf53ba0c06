//! Daytime
//!
//! A wall-clock time-of-day value type with second precision.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod error;
pub mod time;

// Re-export commonly used types at crate root
pub use error::{TimeError, TimeResult};
pub use time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TimeOfDay};
