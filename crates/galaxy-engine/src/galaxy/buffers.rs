use crate::coords::{ColorRgb, Vec3};

/// Flat position and color attributes for a point primitive.
///
/// Both buffers hold three `f32` per particle (`x, y, z` and `r, g, b`), so
/// `positions().len() == colors().len() == 3 * len()` at all times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloudBuffers {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl PointCloudBuffers {
    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, position: Vec3, color: ColorRgb) {
        self.positions.extend_from_slice(&[position.x, position.y, position.z]);
        self.colors.extend_from_slice(&color.to_array());
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        let p = self.positions.get(attribute_range(index)?)?;
        Some(Vec3::new(p[0], p[1], p[2]))
    }

    pub fn color(&self, index: usize) -> Option<ColorRgb> {
        let c = self.colors.get(attribute_range(index)?)?;
        Some(ColorRgb::new(c[0], c[1], c[2]))
    }

    /// Positions as raw bytes for a vertex buffer upload.
    #[inline]
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as raw bytes for a vertex buffer upload.
    #[inline]
    pub fn colors_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

/// Float range of particle `index`, or `None` if it would overflow.
#[inline]
fn attribute_range(index: usize) -> Option<std::ops::Range<usize>> {
    let start = index.checked_mul(3)?;
    Some(start..start.checked_add(3)?)
}
