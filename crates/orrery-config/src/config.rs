//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Viewport settings.
    pub window: WindowConfig,
    /// Camera placement and projection.
    pub camera: CameraConfig,
    /// Animation tuning: speed, scale, lighting and color drift.
    pub animation: AnimationConfig,
    /// Bodies that make up the scene.
    pub scene: SceneConfig,
    /// Input settings.
    pub input: InputConfig,
    /// Frame driver settings.
    pub run: RunConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Viewport configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Title reported in logs.
    pub title: String,
}

impl WindowConfig {
    /// Width over height. A zero height yields `1.0`.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position in the default view.
    pub eye: [f32; 3],
    /// Point the camera looks at.
    pub target: [f32; 3],
    /// Up vector.
    pub up: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Camera height used while the top view is active.
    pub top_view_height: f32,
}

/// Animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Initial speed multiplier applied to elapsed time.
    pub speed: f32,
    /// Initial x/y scale of the transformation matrix.
    pub scale: f32,
    /// Initial user-steerable light direction.
    pub light_direction: [f32; 3],
    /// World-space direction used by bodies with a fixed light.
    pub fixed_light_direction: [f32; 3],
    /// Offset added per translate key press.
    pub translate_step: f32,
    /// Diffuse color every body starts from (RGBA).
    pub initial_color: [f32; 4],
    /// Per-channel starting drift rate of the RGB channels.
    pub initial_color_velocity: f32,
    /// Bound of the random perturbation added to each velocity per frame.
    pub color_jitter: f32,
    /// Upper bound on the magnitude of a channel velocity.
    pub max_color_speed: f32,
    /// Randomize every body color once when the scene starts.
    pub randomize_on_start: bool,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// Which light direction a body is drawn with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LightSource {
    /// The normalized [`AnimationConfig::fixed_light_direction`].
    Fixed,
    /// The user-steerable light vector.
    #[default]
    Steerable,
}

/// Bounded random walk applied to a body's orbit radius.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistanceWalkConfig {
    /// Smallest allowed orbit radius.
    pub min: f32,
    /// Largest allowed orbit radius.
    pub max: f32,
    /// Largest change applied in one frame.
    pub step: f32,
}

/// One orbiting (or central) body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Name used in logs and frame output.
    pub name: String,
    /// OBJ file, relative to [`SceneConfig::asset_dir`].
    pub mesh: String,
    /// Orbit radius. Zero keeps the body at the origin.
    pub distance: f32,
    /// Vertical offset of the orbit plane.
    pub elevation: f32,
    /// Self-rotation rate in radians per scene second.
    pub rotate_rate: f32,
    /// Revolution rate in radians per scene second.
    pub revolve_rate: f32,
    /// Light direction used when drawing this body.
    pub light: LightSource,
    /// Optional jitter of the orbit radius.
    pub distance_walk: Option<DistanceWalkConfig>,
}

/// Scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory OBJ paths are resolved against.
    pub asset_dir: PathBuf,
    /// Bodies in draw order.
    pub bodies: Vec<BodyConfig>,
}

/// Input configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybinding overrides (action name -> key name).
    pub keybindings: HashMap<String, String>,
    /// RON file of scripted input events replayed by the driver.
    pub script: Option<PathBuf>,
}

/// Frame driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to run. Zero runs until interrupted.
    pub frames: u64,
    /// Simulated display interval in milliseconds.
    pub frame_interval_ms: f64,
    /// Pace frames against the wall clock instead of simulating time.
    pub realtime: bool,
    /// File that receives one JSON line per draw call.
    pub output: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for the JSON log file written in debug builds.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Orbital Overture".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 10.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_degrees: 60.0,
            near: 0.1,
            far: 50.0,
            top_view_height: 10.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            scale: 1.0,
            light_direction: [1.0, 1.0, 1.0],
            fixed_light_direction: [-1.0, 3.0, 5.0],
            translate_step: 0.1,
            initial_color: [1.0, 0.7, 0.5, 1.0],
            initial_color_velocity: 0.001,
            color_jitter: 0.0001,
            max_color_speed: 0.01,
            randomize_on_start: true,
            seed: None,
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: "body".to_string(),
            mesh: "ball.obj".to_string(),
            distance: 0.0,
            elevation: 0.0,
            rotate_rate: 1.0,
            revolve_rate: 0.0,
            light: LightSource::Steerable,
            distance_walk: None,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            bodies: vec![
                BodyConfig {
                    name: "star".to_string(),
                    rotate_rate: -1.0,
                    light: LightSource::Fixed,
                    ..BodyConfig::default()
                },
                BodyConfig {
                    name: "planet".to_string(),
                    distance: 4.0,
                    rotate_rate: 1.0,
                    revolve_rate: 1.0,
                    distance_walk: Some(DistanceWalkConfig {
                        min: 3.5,
                        max: 4.5,
                        step: 0.01,
                    }),
                    ..BodyConfig::default()
                },
                BodyConfig {
                    name: "moon".to_string(),
                    distance: 6.0,
                    elevation: 1.0,
                    rotate_rate: 0.8,
                    revolve_rate: -0.8,
                    ..BodyConfig::default()
                },
            ],
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_interval_ms: 1000.0 / 60.0,
            realtime: false,
            output: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Platform config directory for orrery (e.g. `~/.config/orrery`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|d| d.join("orrery"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Absolute-or-relative path of a body's mesh file.
    pub fn mesh_path(&self, body: &BodyConfig) -> PathBuf {
        self.scene.asset_dir.join(&body.mesh)
    }
}
