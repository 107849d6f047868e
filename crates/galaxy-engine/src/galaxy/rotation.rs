use super::GalaxyParameters;

/// Y-axis rotation for the galaxy at `elapsed_secs`, or `None` when rotation
/// is switched off (the host keeps whatever rotation it last applied).
#[inline]
pub fn rotation_y(parameters: &GalaxyParameters, elapsed_secs: f32) -> Option<f32> {
    parameters
        .rotate
        .then(|| elapsed_secs * parameters.rotation_speed)
}
