use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use galaxy_engine::coords::ColorRgb;
use galaxy_engine::core::Experience;
use galaxy_engine::galaxy::{generate_scatter, GalaxyParameters, OffsetScale, PointCloudBuffers, ScatterParameters};
use galaxy_engine::logging::{init_logging, LoggingConfig};
use galaxy_engine::viewport::{DisplayReading, ViewportState};

/// Headless galaxy host: generates a galaxy, replays a few window resizes and
/// drives the render loop clock without a GPU.
#[derive(Debug, Parser)]
#[command(name = "galaxy-studio", version)]
struct Args {
    /// Number of particles.
    #[arg(long, default_value_t = 100_000)]
    count: usize,

    /// Number of spiral arms (at least 1).
    #[arg(long, default_value_t = 15)]
    branches: u32,

    #[arg(long, default_value_t = 5.0)]
    radius: f32,

    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    spin: f32,

    #[arg(long, default_value_t = 0.2)]
    randomness: f32,

    #[arg(long, default_value_t = 3.0)]
    randomness_power: f32,

    #[arg(long, default_value_t = 0.6)]
    max_disk_height: f32,

    /// Do not multiply offsets by `--randomness`.
    #[arg(long)]
    unscaled_offsets: bool,

    #[arg(long, default_value = "#ff6030")]
    inside_color: String,

    #[arg(long, default_value = "#1b3984")]
    outside_color: String,

    /// Keep the galaxy still.
    #[arg(long)]
    no_rotate: bool,

    #[arg(long, default_value_t = 0.1, allow_hyphen_values = true)]
    rotation_speed: f32,

    /// Backdrop particles generated alongside the galaxy (0 disables).
    #[arg(long, default_value_t = 200)]
    scatter: usize,

    /// Seed for the random source.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Frames to simulate at 60 Hz.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Raw device pixel ratio reported by the simulated display.
    #[arg(long, default_value_t = 1.0)]
    pixel_ratio: f64,

    /// Log filter, e.g. "debug" or "galaxy_engine=debug". Falls back to RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn parameters(&self) -> Result<GalaxyParameters> {
        Ok(GalaxyParameters {
            count: self.count,
            radius: self.radius,
            branches: self.branches,
            spin: self.spin,
            randomness: self.randomness,
            randomness_power: self.randomness_power,
            max_disk_height: self.max_disk_height,
            offset_scale: if self.unscaled_offsets { OffsetScale::Unscaled } else { OffsetScale::ByRandomness },
            inside_color: ColorRgb::from_hex(&self.inside_color).context("invalid --inside-color")?,
            outside_color: ColorRgb::from_hex(&self.outside_color).context("invalid --outside-color")?,
            rotate: !self.no_rotate,
            rotation_speed: self.rotation_speed,
            ..GalaxyParameters::default()
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    let display = DisplayReading::new(args.width, args.height, args.pixel_ratio);
    let parameters = args.parameters()?;

    let mut experience = Experience::new(&display, parameters, fastrand::Rng::with_seed(args.seed))
        .context("galaxy parameters rejected")?;

    // Stand-in for the renderer: resize its surface whenever the viewport changes.
    experience.viewport_mut().subscribe(|state: &ViewportState| {
        let (w, h) = state.physical_size();
        log::info!("surface resized to {w}x{h} physical pixels");
    });

    report_points("galaxy", experience.points());

    if args.scatter > 0 {
        let scatter = ScatterParameters { count: args.scatter, ..ScatterParameters::default() };
        let field = generate_scatter(&scatter, &mut fastrand::Rng::with_seed(args.seed.wrapping_add(1)));
        report_points("scatter", &field);
    }

    for reading in resize_script(display) {
        experience.apply_reading(reading);
        let projection = experience.projection();
        log::info!(
            "viewport {}x{} @{} | aspect {:.3}",
            experience.viewport().width(),
            experience.viewport().height(),
            experience.viewport().pixel_ratio(),
            projection.aspect
        );
    }

    let start = experience.clock().start();
    let frame = Duration::from_secs_f64(1.0 / 60.0);
    for i in 1..=args.frames {
        let ft = experience.frame_at(start + frame * i);
        if ft.frame_index % 60 == 0 {
            log::debug!("frame {} | elapsed {:.2}s | rotation {:.3}", ft.frame_index, ft.elapsed, experience.rotation_y());
        }
    }

    println!();
    println!("  galaxy-studio");
    println!("  points       {}", experience.points().len());
    println!("  upload       {} bytes", experience.points().positions_bytes().len() + experience.points().colors_bytes().len());
    println!("  frames       {}", args.frames);
    println!("  rotation y   {:.4} rad", experience.rotation_y());
    println!();

    Ok(())
}

/// Shrink, go portrait, move to a dense display, then restore.
fn resize_script(initial: DisplayReading) -> Vec<DisplayReading> {
    vec![
        DisplayReading::new(initial.width / 2, initial.height / 2, initial.device_pixel_ratio),
        DisplayReading::new(initial.height, initial.width, initial.device_pixel_ratio),
        DisplayReading::new(initial.width, initial.height, 3.0),
        initial,
    ]
}

fn report_points(label: &str, points: &PointCloudBuffers) {
    let (mut min_y, mut max_y, mut max_r) = (f32::INFINITY, f32::NEG_INFINITY, 0.0f32);
    for i in 0..points.len() {
        if let Some(p) = points.position(i) {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
            max_r = max_r.max(p.planar_length());
        }
    }

    if points.is_empty() {
        log::info!("{label}: no points");
    } else {
        log::info!("{label}: {} points | planar radius <= {max_r:.3} | y in [{min_y:.3}, {max_y:.3}]", points.len());
    }
}
