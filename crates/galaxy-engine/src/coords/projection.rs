use crate::viewport::ViewportState;

/// Perspective camera parameters kept in sync with the viewport.
///
/// Only the aspect ratio changes on resize; the host rebuilds its projection
/// matrix from these fields.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerspectiveProjection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl PerspectiveProjection {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, viewport: &ViewportState) -> Self {
        let mut projection = Self {
            fov_y_degrees,
            near,
            far,
            aspect: 1.0,
        };
        projection.set_viewport(viewport);
        projection
    }

    /// Recomputes `aspect` from the viewport's logical size.
    pub fn set_viewport(&mut self, viewport: &ViewportState) {
        self.aspect = viewport.aspect();
    }
}
