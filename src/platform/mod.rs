//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time (`Date.now()` vs `SystemTime`)

pub mod time;

pub use time::{Clock, ManualClock, SystemClock};
