//! Destinations for per-body draw calls.
//!
//! The driver has no GPU. Each draw is handed to a [`DrawSink`] along with
//! the mesh it would bind, so runs can be inspected or diffed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use orrery_obj::VertexAttributes;
use orrery_scene::{BodyFrame, Uniforms};
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;

/// One draw of one body.
#[derive(Debug, Clone, Copy)]
pub struct Draw<'a> {
    /// Zero-based frame index.
    pub frame: u64,
    /// Frame time in milliseconds.
    pub time_ms: f64,
    /// Body being drawn.
    pub body: &'a BodyFrame<'a>,
    /// Mesh bound for the draw.
    pub mesh: &'a VertexAttributes,
}

/// Receives draws in order.
pub trait DrawSink {
    /// Record one draw.
    fn draw(&mut self, draw: &Draw<'_>) -> Result<(), AppError>;

    /// Called once after the last frame.
    fn finish(&mut self) -> Result<(), AppError> {
        Ok(())
    }
}

/// One attribute buffer as the upload side would receive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BufferUpload {
    /// Shader attribute name.
    pub name: &'static str,
    /// Floats per vertex.
    pub components: usize,
    /// Size of the raw byte view.
    pub bytes: usize,
}

impl Draw<'_> {
    /// Name-keyed vertex buffers bound for this draw. Empty streams are
    /// left out, as an upload would skip them.
    pub fn buffers(&self) -> Vec<BufferUpload> {
        self.mesh
            .attributes()
            .into_iter()
            .filter(|array| !array.data.is_empty())
            .map(|array| BufferUpload {
                name: array.name,
                components: array.components,
                bytes: array.as_bytes().len(),
            })
            .collect()
    }
}

#[derive(Serialize)]
struct DrawRecord<'a> {
    frame: u64,
    time_ms: f64,
    body: &'a str,
    mesh: &'a str,
    vertices: usize,
    buffers: Vec<BufferUpload>,
    uniforms: &'a Uniforms,
}

/// Writes one JSON object per draw, one per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write records to it.
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let file = File::create(path).map_err(|source| AppError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Write records to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DrawSink for JsonLinesSink<W> {
    fn draw(&mut self, draw: &Draw<'_>) -> Result<(), AppError> {
        let record = DrawRecord {
            frame: draw.frame,
            time_ms: draw.time_ms,
            body: draw.body.name,
            mesh: draw.body.mesh,
            vertices: draw.mesh.vertex_count(),
            buffers: draw.buffers(),
            uniforms: &draw.body.uniforms,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AppError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Logs each draw at debug level.
#[derive(Debug, Default)]
pub struct LogSink {
    draws: u64,
}

impl LogSink {
    /// A sink with no draws counted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws seen so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl DrawSink for LogSink {
    fn draw(&mut self, draw: &Draw<'_>) -> Result<(), AppError> {
        self.draws += 1;
        let bytes: usize = draw.buffers().iter().map(|b| b.bytes).sum();
        debug!(
            frame = draw.frame,
            body = draw.body.name,
            vertices = draw.mesh.vertex_count(),
            bytes,
            diffuse = ?draw.body.uniforms.u_diffuse,
            "draw"
        );
        Ok(())
    }
}
