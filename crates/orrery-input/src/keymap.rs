//! Key bindings: maps scene actions to physical keys.
//!
//! [`KeyMap`] starts from the default layout (A/D/W/S translate, T top view,
//! O overlay, Space randomize), accepts name-based overrides from the
//! configuration, and can be loaded from a RON file.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;
use winit::keyboard::KeyCode;

/// Serde helper for [`KeyCode`], stored as its variant name (e.g. `"KeyW"`).
pub(crate) mod keycode_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        super::key_name(*code).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        super::parse_key_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }
}

mod keycode_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    pub fn serialize<S: Serializer>(codes: &[KeyCode], s: S) -> Result<S::Ok, S::Error> {
        codes
            .iter()
            .map(|c| super::key_name(*c))
            .collect::<Vec<_>>()
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<KeyCode>, D::Error> {
        Vec::<String>::deserialize(d)?
            .iter()
            .map(|name| {
                super::parse_key_name(name)
                    .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
            })
            .collect()
    }
}

/// Name of a key code, matching its `Debug` output (e.g. `"KeyW"`).
pub fn key_name(code: KeyCode) -> String {
    format!("{code:?}")
}

/// Parse a key name.
///
/// Accepts `KeyCode` variant names (`"KeyT"`, `"Space"`, `"ArrowUp"`) and,
/// case-insensitively, single letters and digits (`"t"`, `"7"`).
pub fn parse_key_name(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return char_to_keycode(c.to_ascii_uppercase());
    }
    Some(match s {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        _ => {
            let rest = s.strip_prefix("Key").or_else(|| s.strip_prefix("Digit"))?;
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => return char_to_keycode(c),
                _ => return None,
            }
        }
    })
}

fn char_to_keycode(c: char) -> Option<KeyCode> {
    Some(match c {
        ' ' => KeyCode::Space,
        'A' => KeyCode::KeyA,
        'B' => KeyCode::KeyB,
        'C' => KeyCode::KeyC,
        'D' => KeyCode::KeyD,
        'E' => KeyCode::KeyE,
        'F' => KeyCode::KeyF,
        'G' => KeyCode::KeyG,
        'H' => KeyCode::KeyH,
        'I' => KeyCode::KeyI,
        'J' => KeyCode::KeyJ,
        'K' => KeyCode::KeyK,
        'L' => KeyCode::KeyL,
        'M' => KeyCode::KeyM,
        'N' => KeyCode::KeyN,
        'O' => KeyCode::KeyO,
        'P' => KeyCode::KeyP,
        'Q' => KeyCode::KeyQ,
        'R' => KeyCode::KeyR,
        'S' => KeyCode::KeyS,
        'T' => KeyCode::KeyT,
        'U' => KeyCode::KeyU,
        'V' => KeyCode::KeyV,
        'W' => KeyCode::KeyW,
        'X' => KeyCode::KeyX,
        'Y' => KeyCode::KeyY,
        'Z' => KeyCode::KeyZ,
        '0' => KeyCode::Digit0,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        _ => return None,
    })
}

/// Discrete scene actions triggered on key-down.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum SceneAction {
    /// Move the scene left by one translate step.
    TranslateLeft,
    /// Move the scene right by one translate step.
    TranslateRight,
    /// Move the scene up by one translate step.
    TranslateUp,
    /// Move the scene down by one translate step.
    TranslateDown,
    /// Switch between the default and the top camera.
    ToggleTopView,
    /// Show or hide the control overlay.
    ToggleOverlay,
    /// Give every body a fresh random color.
    RandomizeColors,
}

impl SceneAction {
    /// Every action.
    pub const ALL: [SceneAction; 7] = [
        Self::TranslateLeft,
        Self::TranslateRight,
        Self::TranslateUp,
        Self::TranslateDown,
        Self::ToggleTopView,
        Self::ToggleOverlay,
        Self::RandomizeColors,
    ];
}

impl fmt::Display for SceneAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for SceneAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.to_string() == s)
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

/// A key bound to more than one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The shared key.
    pub key: KeyCode,
    /// Actions bound to it.
    pub actions: Vec<SceneAction>,
}

/// Maps [`SceneAction`]s to the keys that trigger them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMap {
    /// The binding table.
    #[serde(with = "bindings_serde")]
    pub bindings: HashMap<SceneAction, Vec<KeyCode>>,
}

mod bindings_serde {
    use std::collections::HashMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    use super::SceneAction;

    #[derive(Serialize, Deserialize)]
    struct Keys(#[serde(with = "super::keycode_vec_serde")] Vec<KeyCode>);

    pub fn serialize<S: Serializer>(
        bindings: &HashMap<SceneAction, Vec<KeyCode>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        bindings
            .iter()
            .map(|(action, keys)| (*action, Keys(keys.clone())))
            .collect::<HashMap<_, _>>()
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<HashMap<SceneAction, Vec<KeyCode>>, D::Error> {
        Ok(HashMap::<SceneAction, Keys>::deserialize(d)?
            .into_iter()
            .map(|(action, keys)| (action, keys.0))
            .collect())
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(SceneAction::TranslateLeft, vec![KeyCode::KeyA]);
        bindings.insert(SceneAction::TranslateRight, vec![KeyCode::KeyD]);
        bindings.insert(SceneAction::TranslateUp, vec![KeyCode::KeyW]);
        bindings.insert(SceneAction::TranslateDown, vec![KeyCode::KeyS]);
        bindings.insert(SceneAction::ToggleTopView, vec![KeyCode::KeyT]);
        bindings.insert(SceneAction::ToggleOverlay, vec![KeyCode::KeyO]);
        bindings.insert(SceneAction::RandomizeColors, vec![KeyCode::Space]);
        Self { bindings }
    }
}

impl KeyMap {
    /// Default bindings with config overrides applied.
    ///
    /// Each override replaces every key of the named action. Unknown action
    /// or key names are skipped with a warning.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut map = Self::default();
        map.apply_overrides(overrides);
        map
    }

    /// Apply `action name -> key name` overrides on top of these bindings.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (action_name, key_name) in overrides {
            let action = match action_name.parse::<SceneAction>() {
                Ok(action) => action,
                Err(e) => {
                    warn!("Ignoring keybinding override: {e}");
                    continue;
                }
            };
            match parse_key_name(key_name) {
                Some(key) => self.set_bindings(action, vec![key]),
                None => warn!("Ignoring keybinding override for {action}: unknown key {key_name}"),
            }
        }
    }

    /// Set the keys for an action, replacing existing ones.
    pub fn set_bindings(&mut self, action: SceneAction, keys: Vec<KeyCode>) {
        self.bindings.insert(action, keys);
    }

    /// Keys bound to an action.
    #[must_use]
    pub fn get_bindings(&self, action: SceneAction) -> &[KeyCode] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }

    /// The action a key triggers, if any.
    ///
    /// When a key is bound to several actions the first in
    /// [`SceneAction::ALL`] order wins.
    #[must_use]
    pub fn action_for(&self, key: KeyCode) -> Option<SceneAction> {
        SceneAction::ALL
            .into_iter()
            .find(|action| self.get_bindings(*action).contains(&key))
    }

    /// Keys bound to more than one action.
    #[must_use]
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        let mut seen: HashMap<KeyCode, Vec<SceneAction>> = HashMap::new();
        for action in SceneAction::ALL {
            for key in self.get_bindings(action) {
                seen.entry(*key).or_default().push(action);
            }
        }
        seen.into_iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, actions)| Conflict { key, actions })
            .collect()
    }

    /// Deserialize from a RON string.
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Load from a RON file, falling back to defaults (with a warning) when
    /// the file is missing or malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Malformed keybinding file {}: {e}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "Could not read keybinding file {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Platform config path for `input.ron`.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("orrery").join("input.ron"))
    }
}
