//! Perspective camera with an optional raised "top view".

use glam::{Mat4, Vec3};
use orrery_config::CameraConfig;

/// Scene camera looking at `target` from `eye`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Eye height while the top view is on.
    pub top_view_height: f32,
    top_view: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    /// Build from config. The top view starts off.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            eye: Vec3::from(config.eye),
            target: Vec3::from(config.target),
            up: Vec3::from(config.up),
            fov_y: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            top_view_height: config.top_view_height,
            top_view: false,
        }
    }

    /// Whether the eye is raised.
    pub fn top_view(&self) -> bool {
        self.top_view
    }

    /// Raise the eye to `top_view_height`, or drop it back to zero.
    pub fn set_top_view(&mut self, on: bool) {
        self.top_view = on;
        self.eye.y = if on { self.top_view_height } else { 0.0 };
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// GL clip-space perspective projection.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
    }

    /// `projection · view`.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
