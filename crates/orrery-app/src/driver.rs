//! Headless frame loop.
//!
//! Each frame: feed due scripted events into the input queue, drain it once,
//! tick the clock, update the scene, and hand every body's draw to the sink.

use orrery_config::Config;
use orrery_input::{InputQueue, InputScript, KeyMap};
use orrery_scene::Scene;
use tracing::{info, warn};

use crate::error::AppError;
use crate::frame_clock::FrameClock;
use crate::meshes::MeshRegistry;
use crate::sink::{Draw, DrawSink};

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames executed.
    pub frames: u64,
    /// Draws handed to the sink.
    pub draws: u64,
    /// Scene clock at the end of the run, in seconds.
    pub scene_time: f64,
}

/// Everything one run needs.
pub struct Driver {
    scene: Scene,
    meshes: MeshRegistry,
    keymap: KeyMap,
    queue: InputQueue,
    script: Option<InputScript>,
    clock: FrameClock,
    frames: u64,
}

impl Driver {
    /// Load meshes, key bindings and the input script named by `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let meshes = MeshRegistry::load(config)?;

        let mut keymap = match KeyMap::default_config_path() {
            Some(path) if path.exists() => KeyMap::load(&path),
            _ => KeyMap::default(),
        };
        keymap.apply_overrides(&config.input.keybindings);
        for conflict in keymap.detect_conflicts() {
            warn!(
                "Key {:?} is bound to several actions: {:?}",
                conflict.key, conflict.actions
            );
        }

        let script = config
            .input
            .script
            .as_deref()
            .map(InputScript::load)
            .transpose()?;
        if let Some(script) = &script {
            info!(events = script.remaining(), "input script loaded");
        }

        Ok(Self::new(
            Scene::from_config(config),
            meshes,
            keymap,
            script,
            FrameClock::from_config(&config.run),
            config.run.frames,
        ))
    }

    /// Assemble a driver from parts. `frames == 0` runs until the process
    /// is stopped.
    pub fn new(
        scene: Scene,
        meshes: MeshRegistry,
        keymap: KeyMap,
        script: Option<InputScript>,
        clock: FrameClock,
        frames: u64,
    ) -> Self {
        Self {
            scene,
            meshes,
            keymap,
            queue: InputQueue::new(),
            script,
            clock,
            frames,
        }
    }

    /// The scene being driven.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Queue for events that do not come from the script.
    pub fn queue_mut(&mut self) -> &mut InputQueue {
        &mut self.queue
    }

    /// Run one frame and return how many draws it produced.
    pub fn step(&mut self, sink: &mut dyn DrawSink) -> Result<u64, AppError> {
        let frame = self.clock.frame_count();
        if let Some(script) = &mut self.script {
            for event in script.take_due(frame) {
                self.queue.push(event);
            }
        }
        let input = self.queue.drain(&self.keymap);
        let time_ms = self.clock.tick();

        let mut draws = 0;
        for body in self.scene.frame(time_ms, &input) {
            let mesh = self
                .meshes
                .get(body.mesh)
                .ok_or_else(|| AppError::MissingMesh {
                    body: body.name.to_string(),
                    mesh: body.mesh.to_string(),
                })?;
            sink.draw(&Draw {
                frame,
                time_ms,
                body: &body,
                mesh,
            })?;
            draws += 1;
        }
        Ok(draws)
    }

    /// Run the configured number of frames, then finish the sink.
    pub fn run(&mut self, sink: &mut dyn DrawSink) -> Result<RunSummary, AppError> {
        let mut draws = 0;
        while self.frames == 0 || self.clock.frame_count() < self.frames {
            draws += self.step(sink)?;
        }
        sink.finish()?;

        let summary = RunSummary {
            frames: self.clock.frame_count(),
            draws,
            scene_time: self.scene.scene_time(),
        };
        info!(
            frames = summary.frames,
            draws = summary.draws,
            scene_time = summary.scene_time,
            "run finished"
        );
        Ok(summary)
    }
}
