//! Owning context for a galaxy scene.
//!
//! [`Experience`] holds every piece of per-scene state (viewport, camera
//! projection, parameters, generated buffers, clock, random source) and is
//! passed explicitly to whatever drives the render loop.

mod experience;

pub use experience::Experience;
