//! Platform adapters feeding the viewport tracker.

pub mod winit;
