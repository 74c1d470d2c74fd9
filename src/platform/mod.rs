//! Platform abstraction layer
//!
//! Handles the native window side of the game:
//! - Input events folded into per-frame snapshots
//! - Frame pacing

pub mod input;
pub mod time;

pub use input::InputCollector;
pub use time::{FpsMeter, FrameClock};
