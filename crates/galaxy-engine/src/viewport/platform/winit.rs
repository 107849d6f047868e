use ::winit::dpi::PhysicalSize;
use ::winit::event::WindowEvent;
use ::winit::window::Window;

use crate::viewport::{DisplayReading, DisplaySource};

impl DisplaySource for Window {
    fn reading(&self) -> DisplayReading {
        let size = self.inner_size();
        DisplayReading::from_physical(size.width, size.height, self.scale_factor())
    }
}

/// Translates a winit `WindowEvent` into a display reading for
/// [`ViewportTracker::apply`](crate::viewport::ViewportTracker::apply).
///
/// `current_size` and `scale_factor` are the window's values before the event;
/// each event kind replaces the part it carries. Returns `None` for events that
/// do not affect the viewport.
pub fn resize_reading(
    event: &WindowEvent,
    current_size: PhysicalSize<u32>,
    scale_factor: f64,
) -> Option<DisplayReading> {
    match event {
        WindowEvent::Resized(size) => Some(DisplayReading::from_physical(
            size.width,
            size.height,
            scale_factor,
        )),

        // winit 0.30 hands out a writer instead of the new size. The suggested size
        // keeps the logical size, so only the density changes here.
        WindowEvent::ScaleFactorChanged { scale_factor: new_scale_factor, .. } => {
            Some(DisplayReading::rescaled(
                current_size.width,
                current_size.height,
                scale_factor,
                *new_scale_factor,
            ))
        }

        _ => None,
    }
}
