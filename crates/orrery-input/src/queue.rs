//! Frame-drained input queue.
//!
//! Events may be pushed at any point between frames. The frame loop calls
//! [`InputQueue::drain`] exactly once before updating the scene, so every
//! event pushed before a tick is reflected in that tick.

use std::collections::VecDeque;

use tracing::trace;

use crate::events::{InputEvent, SliderChannel};
use crate::keyboard::{KeyboardState, RawKeyEvent};
use crate::keymap::{KeyMap, SceneAction};
use winit::event::ElementState;

/// Input resolved for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Triggered actions, one per key-down edge, in arrival order.
    pub actions: Vec<SceneAction>,
    sliders: [Option<f32>; 5],
}

impl FrameInput {
    /// The last scaled value a slider reported this frame.
    pub fn slider(&self, channel: SliderChannel) -> Option<f32> {
        self.sliders[channel.slot()]
    }

    /// Every slider that changed this frame, with its final scaled value.
    pub fn sliders(&self) -> impl Iterator<Item = (SliderChannel, f32)> + '_ {
        SliderChannel::ALL
            .into_iter()
            .filter_map(|channel| self.slider(channel).map(|value| (channel, value)))
    }

    /// Record a slider change; later values in the same frame replace earlier ones.
    pub fn set_slider(&mut self, channel: SliderChannel, value: f32) {
        self.sliders[channel.slot()] = Some(value);
    }

    /// True when nothing happened this frame.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.sliders.iter().all(Option::is_none)
    }
}

/// FIFO of raw input events plus the key state needed for edge detection.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    keyboard: KeyboardState,
}

impl InputQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next frame.
    pub fn push(&mut self, event: impl Into<InputEvent>) {
        self.events.push_back(event.into());
    }

    /// Number of events waiting.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events are waiting.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Resolve every pending event into this frame's input.
    pub fn drain(&mut self, keymap: &KeyMap) -> FrameInput {
        let mut frame = FrameInput::default();

        while let Some(event) = self.events.pop_front() {
            match event {
                InputEvent::Key {
                    key,
                    pressed,
                    repeat,
                } => {
                    let state = if pressed {
                        ElementState::Pressed
                    } else {
                        ElementState::Released
                    };
                    let edge = self.keyboard.process_raw(RawKeyEvent { key, state, repeat });
                    if !edge {
                        continue;
                    }
                    match keymap.action_for(key) {
                        Some(action) => frame.actions.push(action),
                        None => trace!(?key, "key has no binding"),
                    }
                }
                InputEvent::Slider { channel, value } => {
                    frame.set_slider(channel, SliderChannel::scaled(value));
                }
            }
        }

        frame
    }
}
