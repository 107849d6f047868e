//! Time subsystem.
//!
//! Frame timing for the host's render loop, decoupled from any windowing code.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
