use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::coords::PerspectiveProjection;
use crate::galaxy::{self, GalaxyParameters, ParameterError, PointCloudBuffers, RandomSource};
use crate::time::{FrameClock, FrameTime};
use crate::viewport::{DisplayReading, DisplaySource, ViewportTracker};

/// Scene context: viewport tracking, camera projection and the galaxy.
///
/// The projection is kept current by a resize subscription registered in
/// [`new`](Self::new). The galaxy is regenerated wholesale whenever the
/// parameters change.
pub struct Experience<R: RandomSource> {
    viewport: ViewportTracker,
    projection: Rc<Cell<PerspectiveProjection>>,

    parameters: GalaxyParameters,
    points: PointCloudBuffers,
    generation: u64,

    clock: FrameClock,
    rng: R,
    rotation_y: f32,
}

impl<R: RandomSource> Experience<R> {
    /// Reads the display, wires the projection to resizes and generates the
    /// first galaxy.
    pub fn new(
        display: &impl DisplaySource,
        parameters: GalaxyParameters,
        mut rng: R,
    ) -> Result<Self, ParameterError> {
        parameters.validate()?;

        let mut viewport = ViewportTracker::initialize(display);

        let projection = Rc::new(Cell::new(PerspectiveProjection::new(75.0, 0.1, 100.0, &viewport.state())));
        let sink = Rc::clone(&projection);
        viewport.subscribe(move |state| {
            let mut p = sink.get();
            p.set_viewport(state);
            sink.set(p);
        });

        let points = galaxy::generate(&parameters, &mut rng);

        Ok(Self {
            viewport,
            projection,
            parameters,
            points,
            generation: 1,
            clock: FrameClock::new(),
            rng,
            rotation_y: 0.0,
        })
    }

    /// Validates and installs new parameters, then regenerates.
    ///
    /// On error the current parameters and buffers stay in place. On success
    /// the previous buffers are returned so the caller can release whatever
    /// it built from them.
    pub fn set_parameters(&mut self, parameters: GalaxyParameters) -> Result<PointCloudBuffers, ParameterError> {
        parameters.validate()?;
        self.parameters = parameters;
        Ok(self.regenerate())
    }

    /// Regenerates the galaxy from the current parameters, returning the
    /// buffers it replaces.
    pub fn regenerate(&mut self) -> PointCloudBuffers {
        let fresh = galaxy::generate(&self.parameters, &mut self.rng);
        let previous = std::mem::replace(&mut self.points, fresh);
        self.generation += 1;

        log::debug!(
            "galaxy regenerated | generation: {}, discarded: {} points, now: {} points",
            self.generation,
            previous.len(),
            self.points.len()
        );

        previous
    }

    /// Forwards a host resize to the viewport tracker.
    #[inline]
    pub fn on_resize(&mut self, width: u32, height: u32, raw_pixel_ratio: f64) {
        self.viewport.on_resize(width, height, raw_pixel_ratio);
    }

    #[inline]
    pub fn apply_reading(&mut self, reading: DisplayReading) {
        self.viewport.apply(reading);
    }

    /// Advances the clock and applies the galaxy rotation.
    pub fn frame(&mut self) -> FrameTime {
        self.frame_at(Instant::now())
    }

    pub fn frame_at(&mut self, now: Instant) -> FrameTime {
        let ft = self.clock.tick_at(now);
        if let Some(angle) = galaxy::rotation_y(&self.parameters, ft.elapsed) {
            self.rotation_y = angle;
        }
        ft
    }

    #[inline]
    pub fn viewport(&self) -> &ViewportTracker {
        &self.viewport
    }

    /// Mutable access for registering further resize listeners.
    #[inline]
    pub fn viewport_mut(&mut self) -> &mut ViewportTracker {
        &mut self.viewport
    }

    #[inline]
    pub fn projection(&self) -> PerspectiveProjection {
        self.projection.get()
    }

    #[inline]
    pub fn parameters(&self) -> &GalaxyParameters {
        &self.parameters
    }

    #[inline]
    pub fn points(&self) -> &PointCloudBuffers {
        &self.points
    }

    /// Number of generation passes so far, starting at 1.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current galaxy rotation around Y, in radians.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
