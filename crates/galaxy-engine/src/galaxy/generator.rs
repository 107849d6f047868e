use std::f32::consts::TAU;

use crate::coords::Vec3;

use super::{GalaxyParameters, PointCloudBuffers, RandomSource};

/// Builds a spiral galaxy point cloud.
///
/// Per particle, in draw order: one value for the radial distance, then a
/// magnitude and a sign for each of x, y and z (seven draws in total).
/// `count == 0` yields empty buffers.
///
/// # Panics
/// Panics if `parameters.branches == 0`. Use [`GalaxyParameters::validate`]
/// at the boundary.
pub fn generate(parameters: &GalaxyParameters, rng: &mut impl RandomSource) -> PointCloudBuffers {
    assert!(parameters.branches >= 1, "galaxy generation needs at least one branch");

    log::debug!(
        "generating galaxy | count: {}, branches: {}, radius: {}",
        parameters.count,
        parameters.branches,
        parameters.radius
    );

    let branches = parameters.branches as usize;
    let mut buffers = PointCloudBuffers::with_capacity(parameters.count);

    for i in 0..parameters.count {
        let radius = rng.uniform01() * parameters.radius;
        let spin_angle = radius * parameters.spin;
        let branch_angle = (i % branches) as f32 / branches as f32 * TAU;

        let offset_x = random_offset(parameters, rng);
        let offset_y = random_offset(parameters, rng);
        let offset_z = random_offset(parameters, rng);

        let falloff = radius / parameters.radius;
        let taper = 1.0 - falloff;
        let angle = branch_angle + spin_angle;

        let position = Vec3::new(
            angle.cos() * radius + offset_x,
            offset_y * parameters.max_disk_height * taper,
            angle.sin() * radius + offset_z,
        );
        let color = parameters.inside_color.lerp(parameters.outside_color, falloff);

        buffers.push(position, color);
    }

    buffers
}

/// `u^power`, signed by a second draw, scaled per [`OffsetScale`](super::OffsetScale).
#[inline]
fn random_offset(parameters: &GalaxyParameters, rng: &mut impl RandomSource) -> f32 {
    let magnitude = rng.uniform01().powf(parameters.randomness_power);
    let sign = if rng.uniform01() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * parameters.offset_scale.factor(parameters.randomness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ColorRgb;
    use crate::galaxy::{Constant, OffsetScale, Scripted};

    fn golden_parameters() -> GalaxyParameters {
        GalaxyParameters {
            count: 1,
            radius: 5.0,
            branches: 1,
            spin: 0.0,
            randomness: 0.0,
            randomness_power: 1.0,
            max_disk_height: 0.6,
            inside_color: ColorRgb::new(1.0, 0.0, 0.0),
            outside_color: ColorRgb::new(0.0, 0.0, 1.0),
            ..GalaxyParameters::default()
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    // ── buffer sizes ──────────────────────────────────────────────────────

    #[test]
    fn buffer_lengths_match_count() {
        for count in [0usize, 1, 7, 1000] {
            let p = GalaxyParameters { count, ..GalaxyParameters::default() };
            let b = generate(&p, &mut fastrand::Rng::with_seed(1));
            assert_eq!(b.positions().len(), 3 * count);
            assert_eq!(b.colors().len(), 3 * count);
            assert_eq!(b.len(), count);
        }
    }

    #[test]
    fn zero_count_is_empty_and_draws_nothing() {
        let p = GalaxyParameters { count: 0, ..GalaxyParameters::default() };
        let mut rng = Scripted::new([0.5]);
        let b = generate(&p, &mut rng);
        assert!(b.is_empty());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn seven_draws_per_particle() {
        let p = GalaxyParameters { count: 3, ..GalaxyParameters::default() };
        let mut rng = Scripted::new([0.25, 0.75]);
        generate(&p, &mut rng);
        assert_eq!(rng.draws(), 21);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn identical_seeds_give_identical_bits() {
        let p = GalaxyParameters { count: 5000, ..GalaxyParameters::default() };
        let a = generate(&p, &mut fastrand::Rng::with_seed(42));
        let b = generate(&p, &mut fastrand::Rng::with_seed(42));

        let bits = |v: &[f32]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(a.positions()), bits(b.positions()));
        assert_eq!(bits(a.colors()), bits(b.colors()));
    }

    #[test]
    fn different_seeds_differ() {
        let p = GalaxyParameters { count: 100, ..GalaxyParameters::default() };
        let a = generate(&p, &mut fastrand::Rng::with_seed(1));
        let b = generate(&p, &mut fastrand::Rng::with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn parameters_are_left_untouched() {
        let p = GalaxyParameters { count: 10, ..GalaxyParameters::default() };
        let before = p.clone();
        generate(&p, &mut fastrand::Rng::with_seed(3));
        assert_eq!(p, before);
    }

    // ── golden values ─────────────────────────────────────────────────────

    #[test]
    fn golden_single_particle() {
        let b = generate(&golden_parameters(), &mut Constant(0.5));

        // radius 2.5, both angles zero, offsets scaled away by randomness 0.
        let pos = b.position(0).unwrap();
        assert_eq!(pos.x, 2.5);
        assert_eq!(pos.y, 0.0);
        assert_eq!(pos.z, 0.0);
        assert_eq!(b.color(0), Some(ColorRgb::new(0.5, 0.0, 0.5)));
    }

    #[test]
    fn golden_single_particle_unscaled_offsets() {
        let p = GalaxyParameters { offset_scale: OffsetScale::Unscaled, ..golden_parameters() };
        let b = generate(&p, &mut Constant(0.5));

        // 0.5^1 with sign draw 0.5 (not < 0.5) -> offset -0.5 on every axis;
        // y is -0.5 * 0.6 * taper 0.5.
        let pos = b.position(0).unwrap();
        assert!(approx(pos.x, 2.0), "x = {}", pos.x);
        assert!(approx(pos.y, -0.15), "y = {}", pos.y);
        assert!(approx(pos.z, -0.5), "z = {}", pos.z);
    }

    #[test]
    fn offsets_scale_with_randomness() {
        let base = GalaxyParameters { randomness: 0.4, ..golden_parameters() };
        let b = generate(&base, &mut Constant(0.5));
        assert!(approx(b.position(0).unwrap().x, 2.5 - 0.5 * 0.4));
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn core_particle_has_inside_color() {
        let p = GalaxyParameters { count: 1, ..GalaxyParameters::default() };
        let b = generate(&p, &mut Constant(0.0));
        assert_eq!(b.color(0), Some(p.inside_color));
        assert_eq!(b.position(0).unwrap().planar_length(), 0.0);
    }

    #[test]
    fn rim_particle_has_outside_color() {
        let p = GalaxyParameters { count: 1, ..GalaxyParameters::default() };
        // First draw is the radius (1.0 -> rim); the rest only shape offsets.
        let b = generate(&p, &mut Scripted::new([1.0, 0.3, 0.2, 0.3, 0.7, 0.3, 0.2]));
        assert_eq!(b.color(0), Some(p.outside_color));
    }

    #[test]
    fn rim_particle_is_flat() {
        let p = GalaxyParameters { count: 1, offset_scale: OffsetScale::Unscaled, ..GalaxyParameters::default() };
        let b = generate(&p, &mut Scripted::new([1.0, 0.9, 0.1, 0.9, 0.1, 0.9, 0.1]));
        assert_eq!(b.position(0).unwrap().y, 0.0);
    }

    // ── branches ──────────────────────────────────────────────────────────

    #[test]
    fn particles_are_spread_evenly_over_branches() {
        let branches = 3u32;
        let count = 10usize;
        let p = GalaxyParameters { count, branches, spin: 0.0, randomness: 0.0, ..GalaxyParameters::default() };
        let b = generate(&p, &mut Constant(0.5));

        let step = TAU / branches as f32;
        let mut per_branch = vec![0usize; branches as usize];
        for i in 0..b.len() {
            let pos = b.position(i).unwrap();
            let angle = pos.z.atan2(pos.x).rem_euclid(TAU);
            let branch = (angle / step).round() as usize % branches as usize;
            assert_eq!(branch, i % branches as usize);
            per_branch[branch] += 1;
        }

        let floor = count / branches as usize;
        let ceil = count.div_ceil(branches as usize);
        assert!(per_branch.iter().all(|&n| n == floor || n == ceil), "{per_branch:?}");
        assert_eq!(per_branch.iter().sum::<usize>(), count);
    }

    #[test]
    fn spin_rotates_with_radius() {
        let p = GalaxyParameters { spin: 1.0, ..golden_parameters() };
        let b = generate(&p, &mut Constant(0.5));
        let pos = b.position(0).unwrap();
        assert!(approx(pos.x, 2.5f32.cos() * 2.5));
        assert!(approx(pos.z, 2.5f32.sin() * 2.5));
    }

    #[test]
    #[should_panic(expected = "at least one branch")]
    fn zero_branches_panics() {
        let p = GalaxyParameters { branches: 0, count: 1, ..GalaxyParameters::default() };
        generate(&p, &mut Constant(0.5));
    }
}
