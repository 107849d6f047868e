//! Galaxy engine crate.
//!
//! Viewport tracking and procedural point-cloud generation for a host that
//! owns the window, the render loop and the GPU side.

pub mod viewport;
pub mod galaxy;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
