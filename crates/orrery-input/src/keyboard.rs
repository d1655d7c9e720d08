//! Key-down edge detection.
//!
//! [`KeyboardState`] remembers which keys are held so a press is reported
//! once, on the transition from released to pressed. Physical key codes are
//! used so WASD works the same on every keyboard layout.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Minimal description of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: KeyCode,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an auto-repeat event.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A non-repeat press of `key`.
    pub fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A release of `key`.
    pub fn released(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Released,
            repeat: false,
        }
    }
}

/// The set of keys currently held.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one event. Returns `true` when it is a key-down edge.
    ///
    /// Repeat events and presses of an already-held key are not edges.
    pub fn process_raw(&mut self, event: RawKeyEvent) -> bool {
        if event.repeat {
            return false;
        }
        match event.state {
            ElementState::Pressed => self.pressed.insert(event.key),
            ElementState::Released => {
                self.pressed.remove(&event.key);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge() {
        let mut kb = KeyboardState::new();
        assert!(kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyW)));
    }

    #[test]
    fn test_held_key_press_is_not_edge() {
        let mut kb = KeyboardState::new();
        assert!(kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyD)));
        assert!(!kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyD)));
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut kb = KeyboardState::new();
        let repeat = RawKeyEvent {
            repeat: true,
            ..RawKeyEvent::pressed(KeyCode::KeyA)
        };
        assert!(!kb.process_raw(repeat));
        assert!(kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyA)));
    }

    #[test]
    fn test_release_then_press_is_new_edge() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::pressed(KeyCode::Space));
        assert!(!kb.process_raw(RawKeyEvent::released(KeyCode::Space)));
        assert!(kb.process_raw(RawKeyEvent::pressed(KeyCode::Space)));
    }

    #[test]
    fn test_release_of_unheld_key_is_harmless() {
        let mut kb = KeyboardState::new();
        assert!(!kb.process_raw(RawKeyEvent::released(KeyCode::KeyT)));
        assert!(kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyT)));
    }
}
