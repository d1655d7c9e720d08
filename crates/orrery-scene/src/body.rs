//! Orbiting bodies.

use glam::Vec3;
use orrery_config::{AnimationConfig, BodyConfig, LightSource};
use rand::Rng;
use tracing::{trace, warn};

use crate::color::ColorDrift;
use crate::distance::DistanceWalk;
use crate::transform::BodyPose;

/// Where a body's light direction comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightMode {
    /// A constant direction, stored normalized.
    Fixed(Vec3),
    /// The user-steerable vector from the controls, used as received.
    Steerable,
}

impl LightMode {
    /// A fixed light pointing along `direction`.
    pub fn fixed(direction: Vec3) -> Self {
        Self::Fixed(direction.normalize_or_zero())
    }

    /// The direction to upload for this frame.
    pub fn direction(&self, steerable: Vec3) -> Vec3 {
        match self {
            Self::Fixed(v) => *v,
            Self::Steerable => steerable,
        }
    }
}

/// One drawable body orbiting the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalBody {
    /// Display name.
    pub name: String,
    /// Mesh file, relative to the asset directory.
    pub mesh: String,
    /// Current orbit radius.
    pub distance: f32,
    /// Optional random walk applied to `distance` every frame.
    pub walk: Option<DistanceWalk>,
    /// Unit direction of the orbit offset before revolving.
    pub direction: Vec3,
    /// Height above the orbital plane.
    pub elevation: f32,
    /// Spin, radians per scene second.
    pub rotate_rate: f32,
    /// Revolution, radians per scene second.
    pub revolve_rate: f32,
    /// Light source.
    pub light: LightMode,
    /// Diffuse color.
    pub color: ColorDrift,
}

impl OrbitalBody {
    /// Build a body from its config entry.
    pub fn from_config(body: &BodyConfig, animation: &AnimationConfig) -> Self {
        let walk = body.distance_walk.as_ref().and_then(|w| {
            let walk = DistanceWalk::new(w.min, w.max, w.step);
            if walk.is_none() {
                warn!(
                    body = %body.name,
                    min = w.min,
                    max = w.max,
                    "distance walk bounds not finite, walk disabled"
                );
            }
            walk
        });
        let distance = walk.map_or(body.distance, |w| w.clamp(body.distance));
        let light = match body.light {
            LightSource::Fixed => LightMode::fixed(Vec3::from(animation.fixed_light_direction)),
            LightSource::Steerable => LightMode::Steerable,
        };
        Self {
            name: body.name.clone(),
            mesh: body.mesh.clone(),
            distance,
            walk,
            direction: Vec3::NEG_X,
            elevation: body.elevation,
            rotate_rate: body.rotate_rate,
            revolve_rate: body.revolve_rate,
            light,
            color: ColorDrift::new(
                animation.initial_color,
                animation.initial_color_velocity,
                animation.color_jitter,
                animation.max_color_speed,
            ),
        }
    }

    /// Offset from the origin before revolving.
    pub fn translation(&self) -> Vec3 {
        self.direction * self.distance + Vec3::Y * self.elevation
    }

    /// Advance color drift and the distance walk by one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let bounced = self.color.step(rng);
        if bounced.iter().any(|b| *b) {
            trace!(body = %self.name, ?bounced, "color bounced");
        }
        if let Some(walk) = &self.walk {
            self.distance = walk.step(self.distance, rng);
        }
    }

    /// Pose at `scene_time` seconds.
    pub fn pose(&self, scene_time: f64) -> BodyPose {
        BodyPose {
            rotate: (self.rotate_rate as f64 * scene_time) as f32,
            revolve: (self.revolve_rate as f64 * scene_time) as f32,
            translation: self.translation(),
        }
    }
}
