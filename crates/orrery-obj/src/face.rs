//! Face records: `f` statements and their `p/t/n` vertex references.

/// One corner of a face: optional raw OBJ indices for each attribute.
///
/// Indices are kept exactly as written (1-based, or negative for relative
/// references). `None` means the component was empty or not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexRef {
    /// Index into the position table.
    pub position: Option<i64>,
    /// Index into the texcoord table.
    pub texcoord: Option<i64>,
    /// Index into the normal table.
    pub normal: Option<i64>,
}

impl VertexRef {
    /// Parse a reference such as `"3"`, `"3/1"`, `"3//2"` or `"-1/-1/-1"`.
    ///
    /// Components past the third are ignored.
    pub fn parse(token: &str) -> Self {
        let mut parts = token.split('/');
        let mut next = || parts.next().and_then(parse_index);
        let position = next();
        let texcoord = next();
        let normal = next();
        Self {
            position,
            texcoord,
            normal,
        }
    }

    /// The three components in table order (position, texcoord, normal).
    pub fn components(&self) -> [Option<i64>; 3] {
        [self.position, self.texcoord, self.normal]
    }
}

/// Integer-prefix parsing: optional sign followed by at least one digit.
///
/// Trailing garbage after the digits is ignored, so `"12abc"` reads as 12.
fn parse_index(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A polygon face of three or more vertex references.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Face {
    /// Corners in file order.
    pub vertices: Vec<VertexRef>,
}

impl Face {
    /// Parse the argument tokens of an `f` statement.
    pub fn parse<'a>(args: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            vertices: args.into_iter().map(VertexRef::parse).collect(),
        }
    }

    /// Number of triangles the fan produces: `n - 2`, or zero for degenerate faces.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }

    /// Fan triangulation from corner 0: `(0,1,2), (0,2,3), ...`.
    ///
    /// Assumes the polygon is convex.
    pub fn triangles(&self) -> impl Iterator<Item = [VertexRef; 3]> + '_ {
        (0..self.triangle_count()).map(move |tri| {
            [
                self.vertices[0],
                self.vertices[tri + 1],
                self.vertices[tri + 2],
            ]
        })
    }
}
