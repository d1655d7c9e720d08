//! User-adjustable scene parameters.

use glam::{Mat4, Vec2, Vec3, Vec4};
use orrery_config::AnimationConfig;
use orrery_input::{SceneAction, SliderChannel};

/// Values driven by keys and sliders.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Multiplier on elapsed time. Never negative.
    pub speed: f32,
    /// Uniform xy scale of the transformation matrix.
    pub scale: f32,
    /// Screen-space translation offset.
    pub offset: Vec2,
    /// Light vector for bodies with a steerable light.
    pub light_direction: Vec3,
    /// Whether the camera is raised.
    pub top_view: bool,
    /// Whether the info overlay is shown.
    pub overlay_visible: bool,
    /// Offset change per translate key press.
    pub translate_step: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl Controls {
    /// Initial values from config.
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            speed: config.speed.max(0.0),
            scale: config.scale,
            offset: Vec2::ZERO,
            light_direction: Vec3::from(config.light_direction),
            top_view: false,
            overlay_visible: true,
            translate_step: config.translate_step,
        }
    }

    /// Apply one action. Color randomization is left to the caller.
    pub fn apply_action(&mut self, action: SceneAction) {
        match action {
            SceneAction::TranslateLeft => self.offset.x -= self.translate_step,
            SceneAction::TranslateRight => self.offset.x += self.translate_step,
            SceneAction::TranslateUp => self.offset.y += self.translate_step,
            SceneAction::TranslateDown => self.offset.y -= self.translate_step,
            SceneAction::ToggleTopView => self.top_view = !self.top_view,
            SceneAction::ToggleOverlay => self.overlay_visible = !self.overlay_visible,
            SceneAction::RandomizeColors => {}
        }
    }

    /// Apply a scaled slider value.
    pub fn apply_slider(&mut self, channel: SliderChannel, value: f32) {
        match channel {
            SliderChannel::Speed => self.speed = value.max(0.0),
            SliderChannel::Scale => self.scale = value,
            SliderChannel::LightX => self.light_direction.x = value,
            SliderChannel::LightY => self.light_direction.y = value,
            SliderChannel::LightZ => self.light_direction.z = value,
        }
    }

    /// Identity with xy scaled and the offset in the translation column.
    pub fn transformation(&self) -> Mat4 {
        Mat4::from_cols(
            Vec4::new(self.scale, 0.0, 0.0, 0.0),
            Vec4::new(0.0, self.scale, 0.0, 0.0),
            Vec4::Z,
            Vec4::new(self.offset.x, self.offset.y, 0.0, 1.0),
        )
    }
}
