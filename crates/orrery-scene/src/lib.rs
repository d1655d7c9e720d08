//! Per-frame animation state for the orrery scene.
//!
//! Each frame the [`Scene`] applies the input drained for that frame, advances
//! its clock by the speed-scaled elapsed time, steps every body's color drift
//! and orbit-radius walk, and produces one set of shader uniforms per body.

pub mod body;
pub mod camera;
pub mod color;
pub mod controls;
pub mod distance;
mod random;
pub mod scene;
pub mod transform;
pub mod uniforms;

pub use body::{LightMode, OrbitalBody};
pub use camera::Camera;
pub use color::ColorDrift;
pub use controls::Controls;
pub use distance::DistanceWalk;
pub use scene::{BodyFrame, Scene};
pub use transform::BodyPose;
pub use uniforms::{UniformValue, Uniforms};
