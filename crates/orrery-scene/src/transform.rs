//! Matrix composition for orbiting bodies.
//!
//! A body spins about its own Y axis, is pushed out to its orbit position,
//! and is then swung around the origin by the revolution angle.

use glam::{Mat4, Vec3};

/// `vp · Ry(revolve) · T(translation) · Ry(rotate)`.
pub fn compose(view_projection: Mat4, translation: Vec3, rotate: f32, revolve: f32) -> Mat4 {
    view_projection
        * Mat4::from_rotation_y(revolve)
        * Mat4::from_translation(translation)
        * Mat4::from_rotation_y(rotate)
}

/// `Ry(rotate) · Ry(revolve)`, the matrix used to rotate normals.
pub fn world(rotate: f32, revolve: f32) -> Mat4 {
    Mat4::from_rotation_y(rotate) * Mat4::from_rotation_y(revolve)
}

/// One body's angles and offset for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    /// Spin about the body's own axis, radians.
    pub rotate: f32,
    /// Revolution about the origin, radians.
    pub revolve: f32,
    /// Offset from the origin before revolving.
    pub translation: Vec3,
}

impl BodyPose {
    /// Clip-space matrix for this pose.
    pub fn matrix(&self, view_projection: Mat4) -> Mat4 {
        compose(view_projection, self.translation, self.rotate, self.revolve)
    }

    /// Normal matrix built from the same angles as [`BodyPose::matrix`].
    pub fn world(&self) -> Mat4 {
        world(self.rotate, self.revolve)
    }
}
