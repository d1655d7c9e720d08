//! Headless driver for the orrery scene.
//!
//! Stands in for a browser page: loads meshes, runs the frame loop with
//! scripted input, and writes every draw call to a [`sink::DrawSink`].

pub mod driver;
pub mod error;
pub mod frame_clock;
pub mod meshes;
pub mod sink;

pub use driver::{Driver, RunSummary};
pub use error::AppError;
pub use frame_clock::{ClockMode, FrameClock};
pub use meshes::MeshRegistry;
pub use sink::{BufferUpload, Draw, DrawSink, JsonLinesSink, LogSink};
