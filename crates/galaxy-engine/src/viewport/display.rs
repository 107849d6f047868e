/// One raw reading from the host's windowing system.
///
/// `width`/`height` are logical pixels; `device_pixel_ratio` is uncapped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayReading {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl DisplayReading {
    #[inline]
    pub const fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self { width, height, device_pixel_ratio }
    }

    /// Converts a physical surface size to a logical reading.
    pub fn from_physical(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width: (physical_width as f64 / scale).round() as u32,
            height: (physical_height as f64 / scale).round() as u32,
            device_pixel_ratio: scale_factor,
        }
    }

    /// Reading after a density change: the logical size is taken from the
    /// physical size at `old_scale`, the ratio becomes `new_scale`.
    pub fn rescaled(physical_width: u32, physical_height: u32, old_scale: f64, new_scale: f64) -> Self {
        Self {
            device_pixel_ratio: new_scale,
            ..Self::from_physical(physical_width, physical_height, old_scale)
        }
    }
}

/// Source of the current window size and density.
///
/// Implemented for `winit::window::Window` and for a plain [`DisplayReading`]
/// (headless hosts, tests).
pub trait DisplaySource {
    fn reading(&self) -> DisplayReading;
}

impl DisplaySource for DisplayReading {
    #[inline]
    fn reading(&self) -> DisplayReading {
        *self
    }
}
