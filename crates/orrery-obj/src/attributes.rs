//! Flattened vertex attribute streams produced by the parser.

/// The three per-vertex attributes an OBJ face can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `v` records.
    Position,
    /// `vt` records.
    Texcoord,
    /// `vn` records.
    Normal,
}

impl Attribute {
    /// All attributes, in `p/t/n` order.
    pub const ALL: [Attribute; 3] = [Self::Position, Self::Texcoord, Self::Normal];

    /// Name the buffer-upload side keys this stream by.
    pub fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Texcoord => "texcoord",
            Self::Normal => "normal",
        }
    }

    /// Nominal number of floats per vertex.
    pub fn components(self) -> usize {
        match self {
            Self::Position | Self::Normal => 3,
            Self::Texcoord => 2,
        }
    }

    /// Zero entry seeded at table index 0.
    pub(crate) fn seed(self) -> Vec<f32> {
        vec![0.0; self.components()]
    }
}

/// A named view of one attribute stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeArray<'a> {
    /// Attribute name (`"position"`, `"texcoord"` or `"normal"`).
    pub name: &'static str,
    /// Nominal floats per vertex.
    pub components: usize,
    /// Flattened values in face-vertex order.
    pub data: &'a [f32],
}

impl<'a> AttributeArray<'a> {
    /// Raw little-endian bytes, ready for a GPU buffer upload.
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.data)
    }

    /// Number of whole vertices in the stream.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.components
    }
}

/// Vertex attribute table: three streams flattened in face-vertex order.
///
/// Streams diverge in vertex count when some face corners omit a texcoord or
/// normal. [`is_consistent`](Self::is_consistent) reports that case; the
/// parser does not repair it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexAttributes {
    /// Positions, 3 floats per vertex.
    pub position: Vec<f32>,
    /// Texture coordinates, 2 floats per vertex.
    pub texcoord: Vec<f32>,
    /// Normals, 3 floats per vertex.
    pub normal: Vec<f32>,
}

impl VertexAttributes {
    /// The stream for one attribute.
    pub fn stream(&self, attribute: Attribute) -> &[f32] {
        match attribute {
            Attribute::Position => &self.position,
            Attribute::Texcoord => &self.texcoord,
            Attribute::Normal => &self.normal,
        }
    }

    pub(crate) fn stream_mut(&mut self, attribute: Attribute) -> &mut Vec<f32> {
        match attribute {
            Attribute::Position => &mut self.position,
            Attribute::Texcoord => &mut self.texcoord,
            Attribute::Normal => &mut self.normal,
        }
    }

    /// Number of vertices, counted from the position stream.
    pub fn vertex_count(&self) -> usize {
        self.position.len() / 3
    }

    /// True when no face produced any vertex.
    pub fn is_empty(&self) -> bool {
        self.position.is_empty() && self.texcoord.is_empty() && self.normal.is_empty()
    }

    /// Whether every non-empty stream describes the same number of vertices
    /// and holds whole tuples.
    pub fn is_consistent(&self) -> bool {
        let count = self.vertex_count();
        Attribute::ALL.into_iter().all(|attribute| {
            let data = self.stream(attribute);
            data.is_empty()
                || (data.len() % attribute.components() == 0
                    && data.len() / attribute.components() == count)
        })
    }

    /// Name-keyed arrays, in `position`, `texcoord`, `normal` order.
    pub fn attributes(&self) -> [AttributeArray<'_>; 3] {
        Attribute::ALL.map(|attribute| AttributeArray {
            name: attribute.name(),
            components: attribute.components(),
            data: self.stream(attribute),
        })
    }

    /// Look up an array by its attribute name.
    pub fn get(&self, name: &str) -> Option<AttributeArray<'_>> {
        self.attributes().into_iter().find(|array| array.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> VertexAttributes {
        VertexAttributes {
            position: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            texcoord: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            normal: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        }
    }

    #[test]
    fn test_attribute_names_and_arity() {
        let names: Vec<_> = Attribute::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["position", "texcoord", "normal"]);
        assert_eq!(Attribute::Texcoord.components(), 2);
    }

    #[test]
    fn test_consistent_full_triangle() {
        let attrs = triangle();
        assert_eq!(attrs.vertex_count(), 3);
        assert!(attrs.is_consistent());
        for array in attrs.attributes() {
            assert_eq!(array.vertex_count(), 3);
        }
    }

    #[test]
    fn test_missing_streams_still_consistent() {
        let mut attrs = triangle();
        attrs.texcoord.clear();
        attrs.normal.clear();
        assert!(attrs.is_consistent());
    }

    #[test]
    fn test_partial_normals_inconsistent() {
        let mut attrs = triangle();
        attrs.normal.truncate(6);
        assert!(!attrs.is_consistent());
    }

    #[test]
    fn test_lookup_by_name() {
        let attrs = triangle();
        let normal = attrs.get("normal").unwrap();
        assert_eq!(normal.components, 3);
        assert_eq!(normal.data.len(), 9);
        assert!(attrs.get("color").is_none());
    }

    #[test]
    fn test_as_bytes_length() {
        let attrs = triangle();
        let bytes = attrs.attributes()[0].as_bytes();
        assert_eq!(bytes.len(), 9 * std::mem::size_of::<f32>());
    }
}
