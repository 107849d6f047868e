use std::fmt;

use crate::coords::ColorRgb;

/// How the per-axis random offset relates to `randomness`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OffsetScale {
    /// Offset is multiplied by `randomness`.
    #[default]
    ByRandomness,
    /// Offset is used as drawn; `randomness` has no effect on positions.
    Unscaled,
}

impl OffsetScale {
    #[inline]
    pub(crate) fn factor(self, randomness: f32) -> f32 {
        match self {
            OffsetScale::ByRandomness => randomness,
            OffsetScale::Unscaled => 1.0,
        }
    }
}

/// Inputs to [`generate`](super::generate).
///
/// `size`, `rotate` and `rotation_speed` do not influence the buffers; they are
/// carried for the host (point size, render-loop rotation).
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyParameters {
    pub count: usize,
    pub size: f32,
    pub radius: f32,
    /// Must be at least 1.
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    /// Vertical spread at the core; tapers linearly to zero at `radius`.
    pub max_disk_height: f32,
    pub offset_scale: OffsetScale,
    pub inside_color: ColorRgb,
    pub outside_color: ColorRgb,
    pub rotate: bool,
    pub rotation_speed: f32,
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 5.0,
            branches: 15,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            max_disk_height: 0.6,
            offset_scale: OffsetScale::ByRandomness,
            inside_color: ColorRgb::from_rgb_u8(0xff, 0x60, 0x30),
            outside_color: ColorRgb::from_rgb_u8(0x1b, 0x39, 0x84),
            rotate: true,
            rotation_speed: 0.1,
        }
    }
}

impl GalaxyParameters {
    /// Checks the values a debug panel or command line could get wrong.
    ///
    /// [`generate`](super::generate) itself only enforces `branches >= 1`;
    /// callers validate at their boundary.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.branches == 0 {
            return Err(ParameterError::NoBranches);
        }

        positive("radius", self.radius)?;
        positive("size", self.size)?;
        non_negative("randomness", self.randomness)?;
        non_negative("randomness_power", self.randomness_power)?;
        non_negative("max_disk_height", self.max_disk_height)?;
        finite("spin", self.spin)?;
        finite("rotation_speed", self.rotation_speed)?;

        if !self.inside_color.is_finite() {
            return Err(ParameterError::NonFinite { field: "inside_color", value: f32::NAN });
        }
        if !self.outside_color.is_finite() {
            return Err(ParameterError::NonFinite { field: "outside_color", value: f32::NAN });
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ParameterError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ParameterError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::Negative { field, value })
    }
}

/// A parameter value the generators cannot work with.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    NoBranches,
    NotPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    NonFinite { field: &'static str, value: f32 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NoBranches => write!(f, "branches must be at least 1"),
            ParameterError::NotPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            ParameterError::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            ParameterError::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}
