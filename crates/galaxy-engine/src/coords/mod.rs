//! Math and value types shared by the viewport and galaxy modules.
//!
//! World space follows the usual right-handed, +Y up convention. Colors are
//! plain RGB in `[0, 1]` with no color-space conversion applied.

mod color;
mod projection;
mod vec3;

pub use color::{ColorParseError, ColorRgb};
pub use projection::PerspectiveProjection;
pub use vec3::Vec3;
