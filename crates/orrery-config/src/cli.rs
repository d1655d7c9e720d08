//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Animated star, planet and moon scene")]
pub struct CliArgs {
    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial speed multiplier.
    #[arg(long)]
    pub speed: Option<f32>,

    /// Initial scale multiplier.
    #[arg(long)]
    pub scale: Option<f32>,

    /// RNG seed for color and distance animation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of frames to run (0 = until interrupted).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Pace frames against the wall clock.
    #[arg(long)]
    pub realtime: bool,

    /// Write one JSON line per draw call to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// RON file of scripted input events.
    #[arg(long)]
    pub input_script: Option<PathBuf>,

    /// Directory OBJ meshes are loaded from.
    #[arg(long)]
    pub asset_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(speed) = args.speed {
            self.animation.speed = speed;
        }
        if let Some(scale) = args.scale {
            self.animation.scale = scale;
        }
        if let Some(seed) = args.seed {
            self.animation.seed = Some(seed);
        }
        if let Some(frames) = args.frames {
            self.run.frames = frames;
        }
        if args.realtime {
            self.run.realtime = true;
        }
        if let Some(ref output) = args.output {
            self.run.output = Some(output.clone());
        }
        if let Some(ref script) = args.input_script {
            self.input.script = Some(script.clone());
        }
        if let Some(ref dir) = args.asset_dir {
            self.scene.asset_dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
