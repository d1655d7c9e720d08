//! Input events fed into the frame queue.

use serde::{Deserialize, Serialize};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::keyboard::RawKeyEvent;

/// Slider controls. Sliders emit integers that are divided by 10 before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliderChannel {
    /// Speed multiplier applied to elapsed time.
    Speed,
    /// Scale of the transformation matrix.
    Scale,
    /// Light direction x.
    LightX,
    /// Light direction y.
    LightY,
    /// Light direction z.
    LightZ,
}

impl SliderChannel {
    /// Every channel, in a fixed order.
    pub const ALL: [SliderChannel; 5] = [
        Self::Speed,
        Self::Scale,
        Self::LightX,
        Self::LightY,
        Self::LightZ,
    ];

    /// Convert a raw slider value into the value the scene uses.
    pub fn scaled(raw: i32) -> f32 {
        raw as f32 / 10.0
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// One input event, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A key changed state.
    Key {
        /// Physical key.
        #[serde(with = "crate::keymap::keycode_serde")]
        key: KeyCode,
        /// `true` for key-down.
        pressed: bool,
        /// Auto-repeat flag.
        #[serde(default)]
        repeat: bool,
    },
    /// A slider moved to a new raw value.
    Slider {
        /// Which slider.
        channel: SliderChannel,
        /// Raw slider value, before the divide-by-10.
        value: i32,
    },
}

impl InputEvent {
    /// A key-down event.
    pub fn key_down(key: KeyCode) -> Self {
        Self::Key {
            key,
            pressed: true,
            repeat: false,
        }
    }

    /// A key-up event.
    pub fn key_up(key: KeyCode) -> Self {
        Self::Key {
            key,
            pressed: false,
            repeat: false,
        }
    }

    /// A slider change.
    pub fn slider(channel: SliderChannel, value: i32) -> Self {
        Self::Slider { channel, value }
    }
}

impl From<RawKeyEvent> for InputEvent {
    fn from(event: RawKeyEvent) -> Self {
        Self::Key {
            key: event.key,
            pressed: event.state == ElementState::Pressed,
            repeat: event.repeat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_scaling() {
        assert_eq!(SliderChannel::scaled(10), 1.0);
        assert_eq!(SliderChannel::scaled(25), 2.5);
        assert_eq!(SliderChannel::scaled(-5), -0.5);
    }

    #[test]
    fn test_slots_are_distinct() {
        let slots: Vec<usize> = SliderChannel::ALL.iter().map(|c| c.slot()).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_event_ron_format() {
        let events: Vec<InputEvent> = ron::from_str(
            r#"[Key(key: "Space", pressed: true), Slider(channel: Speed, value: 20)]"#,
        )
        .unwrap();
        assert_eq!(events[0], InputEvent::key_down(KeyCode::Space));
        assert_eq!(events[1], InputEvent::slider(SliderChannel::Speed, 20));
    }

    #[test]
    fn test_from_raw_key_event() {
        let event: InputEvent = RawKeyEvent::released(KeyCode::KeyO).into();
        assert_eq!(event, InputEvent::key_up(KeyCode::KeyO));
    }
}
