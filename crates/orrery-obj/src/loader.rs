//! Loading OBJ files from disk.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::attributes::VertexAttributes;
use crate::parser::parse_obj_with_stats;

/// Errors from [`load_obj`]. Parsing itself never fails; only I/O can.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    /// The file could not be read.
    #[error("failed to read OBJ file {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse an OBJ file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn load_obj(path: &Path) -> Result<VertexAttributes, ObjError> {
    let bytes = std::fs::read(path).map_err(|source| ObjError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!(path = %path.display(), "OBJ file is not valid UTF-8, decoding lossily");
    }
    let (attributes, stats) = parse_obj_with_stats(&text);
    info!(
        path = %path.display(),
        vertices = attributes.vertex_count(),
        triangles = stats.triangles,
        skipped_lines = stats.skipped_lines,
        "loaded OBJ mesh"
    );
    Ok(attributes)
}
