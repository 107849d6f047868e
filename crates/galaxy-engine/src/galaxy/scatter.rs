use crate::coords::{ColorRgb, Vec3};

use super::{PointCloudBuffers, RandomSource};

/// Backdrop particles spread through a stack of vertically laid out sections.
///
/// The box is `spread` wide in x and z, centred on the origin. In y it starts
/// half a section above the first section and extends down through
/// `section_count` sections spaced `section_distance` apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterParameters {
    pub count: usize,
    pub spread: f32,
    pub section_distance: f32,
    pub section_count: u32,
    pub color: ColorRgb,
}

impl Default for ScatterParameters {
    fn default() -> Self {
        Self {
            count: 200,
            spread: 10.0,
            section_distance: 4.0,
            section_count: 3,
            color: ColorRgb::from_rgb_u8(0xff, 0xed, 0xed),
        }
    }
}

/// Uniformly scatters `count` particles, three draws (x, y, z) each.
pub fn generate_scatter(parameters: &ScatterParameters, rng: &mut impl RandomSource) -> PointCloudBuffers {
    log::debug!("generating scatter field | count: {}", parameters.count);

    let top = parameters.section_distance * 0.5;
    let depth = parameters.section_distance * parameters.section_count as f32;

    let mut buffers = PointCloudBuffers::with_capacity(parameters.count);
    for _ in 0..parameters.count {
        let x = (rng.uniform01() - 0.5) * parameters.spread;
        let y = top - rng.uniform01() * depth;
        let z = (rng.uniform01() - 0.5) * parameters.spread;
        buffers.push(Vec3::new(x, y, z), parameters.color);
    }
    buffers
}
