//! Wavefront OBJ geometry loading: text to flattened, name-keyed vertex
//! attribute arrays ready for buffer upload.
//!
//! Only the geometry statements `v`, `vt`, `vn` and `f` are understood.
//! Everything else is skipped with a diagnostic, and malformed input never
//! makes the parser fail.

pub mod attributes;
pub mod face;
pub mod loader;
pub mod parser;

pub use attributes::{Attribute, AttributeArray, VertexAttributes};
pub use face::{Face, VertexRef};
pub use loader::{ObjError, load_obj};
pub use parser::{ParseStats, parse_obj, parse_obj_with_stats};
