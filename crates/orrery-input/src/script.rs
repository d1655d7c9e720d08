//! Scripted input: a RON list of events tagged with the frame they fire on.
//!
//! ```ron
//! [
//!     (frame: 30, event: Slider(channel: Speed, value: 20)),
//!     (frame: 60, event: Key(key: "Space", pressed: true)),
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::events::InputEvent;

/// Errors loading an input script.
#[derive(Debug, thiserror::Error)]
pub enum InputScriptError {
    /// The script file could not be read.
    #[error("failed to read input script {}: {source}", path.display())]
    Read {
        /// Script path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The script is not valid RON.
    #[error("failed to parse input script: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// One event and the frame it is delivered before.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Zero-based frame index.
    pub frame: u64,
    /// The event.
    pub event: InputEvent,
}

/// Events ordered by frame; events sharing a frame keep file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    events: Vec<ScriptedEvent>,
    cursor: usize,
}

impl InputScript {
    /// Build a script from events in any order.
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        events.sort_by_key(|e| e.frame);
        Self { events, cursor: 0 }
    }

    /// Parse a script from RON text.
    pub fn from_ron(s: &str) -> Result<Self, InputScriptError> {
        Ok(Self::new(ron::from_str(s)?))
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, InputScriptError> {
        let text = std::fs::read_to_string(path).map_err(|source| InputScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text)
    }

    /// Events due at or before `frame` that have not been taken yet.
    pub fn take_due(&mut self, frame: u64) -> impl Iterator<Item = InputEvent> + '_ {
        let start = self.cursor;
        let due = self.events[start..]
            .iter()
            .take_while(|e| e.frame <= frame)
            .count();
        self.cursor += due;
        self.events[start..start + due].iter().map(|e| e.event)
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SliderChannel;
    use winit::keyboard::KeyCode;

    const SCRIPT: &str = r#"[
        (frame: 5, event: Key(key: "KeyT", pressed: true)),
        (frame: 1, event: Slider(channel: Scale, value: 20)),
        (frame: 5, event: Key(key: "KeyT", pressed: false)),
    ]"#;

    #[test]
    fn test_events_sorted_by_frame() {
        let mut script = InputScript::from_ron(SCRIPT).unwrap();
        assert_eq!(script.take_due(0).count(), 0);
        let first: Vec<_> = script.take_due(1).collect();
        assert_eq!(first, vec![InputEvent::slider(SliderChannel::Scale, 20)]);
        let later: Vec<_> = script.take_due(10).collect();
        assert_eq!(
            later,
            vec![
                InputEvent::key_down(KeyCode::KeyT),
                InputEvent::key_up(KeyCode::KeyT)
            ]
        );
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_events_delivered_once() {
        let mut script = InputScript::from_ron(SCRIPT).unwrap();
        assert_eq!(script.take_due(5).count(), 3);
        assert_eq!(script.take_due(5).count(), 0);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = InputScript::from_ron(r#"[(frame: 0, event: Key(key: "Hyper", pressed: true))]"#)
            .unwrap_err();
        assert!(matches!(err, InputScriptError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputScript::load(&dir.path().join("none.ron")).unwrap_err();
        assert!(matches!(err, InputScriptError::Read { .. }));
    }

    #[test]
    fn test_bundled_demo_script_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/demo_input.ron");
        let script = InputScript::load(Path::new(path)).unwrap();
        assert!(script.remaining() > 0);
    }
}
