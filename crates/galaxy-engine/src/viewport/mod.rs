//! Viewport subsystem.
//!
//! Tracks the drawable size and display density of the host window and fans
//! resize notifications out to subscribers.
//!
//! The public API does not expose platform types. `platform::winit` bridges a
//! winit window into [`DisplaySource`] readings.

mod display;
mod state;
mod tracker;

pub mod platform;

pub use display::{DisplayReading, DisplaySource};
pub use state::{cap_pixel_ratio, ViewportState, MAX_PIXEL_RATIO};
pub use tracker::{SubscriptionId, ViewportTracker};
