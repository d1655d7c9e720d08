//! Configuration system for the orrery screensaver.
//!
//! Settings persist to disk as a RON file (`config.ron`), created with
//! defaults on first run. Missing sections fall back to defaults and CLI
//! flags override loaded values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, BodyConfig, CameraConfig, Config, DebugConfig, DistanceWalkConfig,
    InputConfig, LightSource, RunConfig, SceneConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
