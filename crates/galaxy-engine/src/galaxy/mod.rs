//! Procedural point clouds.
//!
//! Generation is a pure function of a parameter set and an injected
//! [`RandomSource`]; the same parameters with an identically seeded source
//! always produce bit-identical buffers. Buffers are rebuilt wholesale on every
//! parameter change. Releasing whatever the renderer built from the previous
//! buffers is the caller's job and must happen before the new ones are handed over.

mod buffers;
mod generator;
mod params;
mod random;
mod rotation;
mod scatter;

pub use buffers::PointCloudBuffers;
pub use generator::generate;
pub use params::{GalaxyParameters, OffsetScale, ParameterError};
pub use random::{Constant, RandomSource, Scripted};
pub use rotation::rotation_y;
pub use scatter::{generate_scatter, ScatterParameters};
