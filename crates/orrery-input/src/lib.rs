//! Input for the orrery scene: key and slider events, configurable key
//! bindings, and a queue drained once per frame.
//!
//! Key presses are edge-triggered (one action per press, repeats ignored).
//! Slider changes keep only the last value seen in a frame.

pub mod events;
pub mod keyboard;
pub mod keymap;
pub mod queue;
pub mod script;

pub use events::{InputEvent, SliderChannel};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use keymap::{Conflict, KeyMap, SceneAction, key_name, parse_key_name};
pub use queue::{FrameInput, InputQueue};
pub use script::{InputScript, InputScriptError, ScriptedEvent};
