/// Upper bound applied to the device pixel ratio.
///
/// Rendering cost grows with the square of the ratio, so very dense displays
/// are rendered at 2x.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Current viewport size in logical pixels plus the capped pixel ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl ViewportState {
    #[inline]
    pub const fn new(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self { width, height, pixel_ratio }
    }

    /// Builds a state from raw environment values, capping the pixel ratio.
    pub fn from_raw(width: u32, height: u32, raw_pixel_ratio: f64) -> Self {
        Self::new(width, height, cap_pixel_ratio(raw_pixel_ratio))
    }

    /// Width over height. A zero height (minimized window) yields `width / 1`.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Size in physical pixels a rendering surface should be configured with.
    pub fn physical_size(self) -> (u32, u32) {
        (
            (self.width as f32 * self.pixel_ratio).round() as u32,
            (self.height as f32 * self.pixel_ratio).round() as u32,
        )
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0 && self.pixel_ratio > 0.0 && self.pixel_ratio.is_finite()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

/// Caps a raw device pixel ratio at [`MAX_PIXEL_RATIO`].
///
/// Non-finite or non-positive input falls back to `1.0`.
pub fn cap_pixel_ratio(raw: f64) -> f32 {
    // Capped before the cast; the positivity check runs on the f32 since tiny
    // positive f64 values round to 0.0.
    let capped = raw.min(MAX_PIXEL_RATIO as f64) as f32;
    if !raw.is_finite() || capped <= 0.0 {
        log::warn!("ignoring invalid device pixel ratio {raw}, using 1.0");
        return 1.0;
    }

    if (capped as f64) < raw {
        log::debug!("device pixel ratio {raw} capped to {capped}");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_below_cap_is_kept() {
        assert_eq!(cap_pixel_ratio(1.0), 1.0);
        assert_eq!(cap_pixel_ratio(1.5), 1.5);
        assert_eq!(cap_pixel_ratio(2.0), 2.0);
    }

    #[test]
    fn ratio_above_cap_is_clamped() {
        assert_eq!(cap_pixel_ratio(3.0), MAX_PIXEL_RATIO);
        assert_eq!(cap_pixel_ratio(2.000_001), MAX_PIXEL_RATIO);
        assert_eq!(cap_pixel_ratio(1e300), MAX_PIXEL_RATIO);
    }

    #[test]
    fn invalid_ratio_falls_back_to_one() {
        assert_eq!(cap_pixel_ratio(f64::NAN), 1.0);
        assert_eq!(cap_pixel_ratio(f64::INFINITY), 1.0);
        assert_eq!(cap_pixel_ratio(0.0), 1.0);
        assert_eq!(cap_pixel_ratio(-2.0), 1.0);
    }

    #[test]
    fn ratio_below_f32_range_falls_back_to_one() {
        assert_eq!(cap_pixel_ratio(1e-300), 1.0);
        assert_eq!(cap_pixel_ratio(f64::MIN_POSITIVE), 1.0);
    }

    #[test]
    fn physical_size_scales_by_ratio() {
        assert_eq!(ViewportState::from_raw(800, 600, 3.0).physical_size(), (1600, 1200));
        assert_eq!(ViewportState::new(101, 51, 1.5).physical_size(), (152, 77));
    }

    #[test]
    fn aspect_with_zero_height() {
        assert_eq!(ViewportState::new(640, 0, 1.0).aspect(), 640.0);
        assert!(!ViewportState::new(640, 0, 1.0).is_valid());
    }
}
