//! Line-oriented OBJ parser.
//!
//! Each `v`/`vt`/`vn` line appends one record to its index table. Each `f`
//! line is fan-triangulated and every corner of every triangle copies the
//! referenced records onto the output streams. The tables are seeded with a
//! zero record at index 0 so 1-based OBJ indices address them directly.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::attributes::{Attribute, VertexAttributes};
use crate::face::{Face, VertexRef};

/// Counters collected during one parse pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// `v` records read.
    pub positions: usize,
    /// `vt` records read.
    pub texcoords: usize,
    /// `vn` records read.
    pub normals: usize,
    /// `f` statements read.
    pub faces: usize,
    /// Triangles emitted after fan triangulation.
    pub triangles: usize,
    /// Lines skipped because of an unhandled keyword.
    pub skipped_lines: usize,
    /// Face components whose index named no table entry.
    pub unresolved_refs: usize,
}

/// Per-attribute record tables, each seeded with a zero entry.
struct IndexTables {
    tables: [Vec<Vec<f32>>; 3],
}

impl IndexTables {
    fn new() -> Self {
        Self {
            tables: Attribute::ALL.map(|attribute| vec![attribute.seed()]),
        }
    }

    fn push(&mut self, attribute: Attribute, record: Vec<f32>) {
        self.tables[attribute as usize].push(record);
    }

    /// Resolve a raw OBJ index. Negative indices count back from the current
    /// table length, so `-1` is the most recently added record.
    fn resolve(&self, attribute: Attribute, index: i64) -> Option<&[f32]> {
        let table = &self.tables[attribute as usize];
        let resolved = if index >= 0 {
            index
        } else {
            table.len() as i64 + index
        };
        usize::try_from(resolved)
            .ok()
            .and_then(|i| table.get(i))
            .map(Vec::as_slice)
    }
}

struct ObjParser {
    tables: IndexTables,
    output: VertexAttributes,
    stats: ParseStats,
    warned: HashSet<String>,
}

impl ObjParser {
    fn new() -> Self {
        Self {
            tables: IndexTables::new(),
            output: VertexAttributes::default(),
            stats: ParseStats::default(),
            warned: HashSet::new(),
        }
    }

    fn line(&mut self, line_no: usize, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return;
        };

        match keyword {
            "v" => {
                self.stats.positions += 1;
                self.tables.push(Attribute::Position, parse_floats(tokens));
            }
            "vt" => {
                self.stats.texcoords += 1;
                self.tables.push(Attribute::Texcoord, parse_floats(tokens));
            }
            "vn" => {
                self.stats.normals += 1;
                self.tables.push(Attribute::Normal, parse_floats(tokens));
            }
            "f" => self.face(&Face::parse(tokens)),
            other => self.unhandled(line_no, other),
        }
    }

    fn face(&mut self, face: &Face) {
        self.stats.faces += 1;
        for triangle in face.triangles() {
            self.stats.triangles += 1;
            for corner in &triangle {
                self.corner(corner);
            }
        }
    }

    fn corner(&mut self, corner: &VertexRef) {
        for (attribute, index) in Attribute::ALL.into_iter().zip(corner.components()) {
            // Empty components contribute nothing for this attribute.
            let Some(index) = index else {
                continue;
            };
            match self.tables.resolve(attribute, index) {
                Some(record) => self
                    .output
                    .stream_mut(attribute)
                    .extend_from_slice(record),
                None => {
                    self.stats.unresolved_refs += 1;
                    debug!(
                        attribute = attribute.name(),
                        index, "OBJ index does not name a record, skipping"
                    );
                }
            }
        }
    }

    fn unhandled(&mut self, line_no: usize, keyword: &str) {
        self.stats.skipped_lines += 1;
        if self.warned.insert(keyword.to_string()) {
            warn!(keyword, line = line_no, "unhandled OBJ keyword");
        } else {
            trace!(keyword, line = line_no, "unhandled OBJ keyword");
        }
    }
}

/// Parse every token as a float; unparseable tokens become NaN.
fn parse_floats<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<f32> {
    tokens
        .map(|token| token.parse::<f32>().unwrap_or(f32::NAN))
        .collect()
}

/// Parse OBJ text into flattened vertex attribute streams.
///
/// Never fails: unknown keywords are skipped with a diagnostic and malformed
/// numbers propagate as NaN.
pub fn parse_obj(text: &str) -> VertexAttributes {
    parse_obj_with_stats(text).0
}

/// [`parse_obj`], also returning the counters collected along the way.
pub fn parse_obj_with_stats(text: &str) -> (VertexAttributes, ParseStats) {
    let mut parser = ObjParser::new();
    for (i, line) in text.lines().enumerate() {
        parser.line(i + 1, line);
    }
    (parser.output, parser.stats)
}
