//! The animated scene and its per-frame update.

use orrery_config::Config;
use orrery_input::{FrameInput, SceneAction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::body::OrbitalBody;
use crate::camera::Camera;
use crate::controls::Controls;
use crate::uniforms::Uniforms;

/// What to draw for one body this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFrame<'a> {
    /// Body name.
    pub name: &'a str,
    /// Mesh file the body is drawn with.
    pub mesh: &'a str,
    /// Shader inputs.
    pub uniforms: Uniforms,
}

/// Bodies, camera, controls and the scene clock.
///
/// The clock accumulates speed-scaled elapsed time, so a speed change only
/// affects how fast angles grow from that frame on.
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<OrbitalBody>,
    controls: Controls,
    camera: Camera,
    aspect: f32,
    rng: ChaCha8Rng,
    seed: u64,
    last_time_ms: f64,
    scene_time: f64,
}

impl Scene {
    /// Assemble a scene. Colors are left as the bodies carry them.
    pub fn new(
        bodies: Vec<OrbitalBody>,
        controls: Controls,
        camera: Camera,
        aspect: f32,
        seed: u64,
    ) -> Self {
        Self {
            bodies,
            controls,
            camera,
            aspect,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            last_time_ms: 0.0,
            scene_time: 0.0,
        }
    }

    /// Build the configured bodies. Without a configured seed one is drawn
    /// from the thread RNG and logged so the run can be reproduced.
    pub fn from_config(config: &Config) -> Self {
        let animation = &config.animation;
        let seed = animation.seed.unwrap_or_else(|| rand::rng().random());
        let bodies = config
            .scene
            .bodies
            .iter()
            .map(|b| OrbitalBody::from_config(b, animation))
            .collect();

        let mut scene = Self::new(
            bodies,
            Controls::from_config(animation),
            Camera::from_config(&config.camera),
            config.window.aspect_ratio(),
            seed,
        );
        if animation.randomize_on_start {
            scene.randomize_colors();
        }
        info!(seed, bodies = scene.bodies.len(), "scene created");
        scene
    }

    /// Bodies in draw order.
    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    /// Current key and slider state.
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// The scene camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Seed of the scene RNG.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accumulated scene time in seconds.
    pub fn scene_time(&self) -> f64 {
        self.scene_time
    }

    /// Viewport width over height.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Give every body a new random RGB color.
    pub fn randomize_colors(&mut self) {
        for body in &mut self.bodies {
            body.color.randomize(&mut self.rng);
        }
        debug!("body colors randomized");
    }

    /// Apply one resolved action.
    pub fn apply_action(&mut self, action: SceneAction) {
        self.controls.apply_action(action);
        match action {
            SceneAction::ToggleTopView => {
                self.camera.set_top_view(self.controls.top_view);
                debug!(top_view = self.controls.top_view, "camera view toggled");
            }
            SceneAction::ToggleOverlay => {
                debug!(visible = self.controls.overlay_visible, "overlay toggled");
            }
            SceneAction::RandomizeColors => self.randomize_colors(),
            _ => {}
        }
    }

    /// Run one frame at `time_ms` (milliseconds since start) and return
    /// the draws for every body, in declaration order.
    pub fn frame(&mut self, time_ms: f64, input: &FrameInput) -> Vec<BodyFrame<'_>> {
        for action in &input.actions {
            self.apply_action(*action);
        }
        for (channel, value) in input.sliders() {
            self.controls.apply_slider(channel, value);
        }

        self.advance_clock(time_ms);

        for body in &mut self.bodies {
            body.update(&mut self.rng);
        }

        let view_projection = self.camera.view_projection(self.aspect);
        let transformation = self.controls.transformation();
        let light = self.controls.light_direction;
        let scene_time = self.scene_time;

        self.bodies
            .iter()
            .map(|body| {
                let pose = body.pose(scene_time);
                BodyFrame {
                    name: &body.name,
                    mesh: &body.mesh,
                    uniforms: Uniforms::new(
                        pose.matrix(view_projection),
                        pose.world(),
                        transformation,
                        body.color.color(),
                        body.light.direction(light),
                    ),
                }
            })
            .collect()
    }

    fn advance_clock(&mut self, time_ms: f64) {
        if !time_ms.is_finite() || time_ms <= self.last_time_ms {
            return;
        }
        let elapsed = (time_ms - self.last_time_ms) * 0.001;
        self.scene_time += elapsed * f64::from(self.controls.speed);
        self.last_time_ms = time_ms;
    }
}
