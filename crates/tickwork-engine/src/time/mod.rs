//! Time subsystem.
//!
//! - [`FrameClock`]: one per window, `tick()` once per presented frame
//! - [`IntervalTimer`]: fixed-period ticks polled from the frame loop

mod frame_clock;
mod interval;

pub use frame_clock::{FrameClock, FrameTime};
pub use interval::IntervalTimer;
