//! `orrery`: runs the star, planet and moon scene without a window.
//!
//! Run with: `cargo run -p orrery-app -- --frames 120 --output draws.jsonl`

use std::process::ExitCode;

use clap::Parser;
use orrery_app::{AppError, Driver, DrawSink, JsonLinesSink, LogSink};
use orrery_config::{CliArgs, Config, ConfigError, default_config_dir};
use tracing::{error, info, warn};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("orrery: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse();

    // Logging is not up yet, so a config failure is reported after init.
    let (mut config, config_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(
        config.debug.log_dir.as_deref(),
        cfg!(debug_assertions),
        Some(&config),
    );
    if let Some(e) = config_error {
        warn!("Using default config: {e}");
    }

    info!("{}", config.window.title);
    info!(
        "Viewport: {}x{} | Bodies: {} | Frames: {}",
        config.window.width,
        config.window.height,
        config.scene.bodies.len(),
        config.run.frames
    );

    let mut driver = Driver::from_config(&config)?;
    let mut sink: Box<dyn DrawSink> = match &config.run.output {
        Some(path) => {
            info!("Writing draws to {}", path.display());
            Box::new(JsonLinesSink::create(path)?)
        }
        None => Box::new(LogSink::new()),
    };
    driver.run(sink.as_mut())?;
    Ok(())
}

fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    Config::load_or_create(&dir)
}
