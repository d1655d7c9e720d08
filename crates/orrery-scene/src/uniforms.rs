//! Per-body shader inputs.

use glam::{Mat4, Vec3};
use serde::Serialize;

/// A single uniform value, as uploaded to the shader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UniformValue {
    /// Column-major 4x4 matrix.
    Mat4([f32; 16]),
    /// Four-component vector.
    Vec4([f32; 4]),
    /// Three-component vector.
    Vec3([f32; 3]),
}

/// The uniforms one draw of one body needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Uniforms {
    /// Full clip-space matrix.
    pub u_matrix: [f32; 16],
    /// Rotation used for normals.
    pub u_world: [f32; 16],
    /// Screen-space scale and offset.
    pub u_transformation: [f32; 16],
    /// RGBA diffuse color.
    pub u_diffuse: [f32; 4],
    /// Light direction.
    #[serde(rename = "u_lightDirection")]
    pub u_light_direction: [f32; 3],
}

impl Uniforms {
    /// Names recognized by the shader program, in upload order.
    pub const NAMES: [&'static str; 5] = [
        "u_matrix",
        "u_world",
        "u_transformation",
        "u_diffuse",
        "u_lightDirection",
    ];

    /// Flatten matrices to column-major arrays.
    pub fn new(
        matrix: Mat4,
        world: Mat4,
        transformation: Mat4,
        diffuse: [f32; 4],
        light_direction: Vec3,
    ) -> Self {
        Self {
            u_matrix: matrix.to_cols_array(),
            u_world: world.to_cols_array(),
            u_transformation: transformation.to_cols_array(),
            u_diffuse: diffuse,
            u_light_direction: light_direction.to_array(),
        }
    }

    /// Name-keyed values, in the order of [`Uniforms::NAMES`].
    pub fn entries(&self) -> [(&'static str, UniformValue); 5] {
        [
            (Self::NAMES[0], UniformValue::Mat4(self.u_matrix)),
            (Self::NAMES[1], UniformValue::Mat4(self.u_world)),
            (Self::NAMES[2], UniformValue::Mat4(self.u_transformation)),
            (Self::NAMES[3], UniformValue::Vec4(self.u_diffuse)),
            (Self::NAMES[4], UniformValue::Vec3(self.u_light_direction)),
        ]
    }

    /// Look up one value by uniform name.
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Uniforms {
        Uniforms::new(
            Mat4::from_translation(Vec3::X),
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            [0.1, 0.2, 0.3, 1.0],
            Vec3::ONE,
        )
    }

    #[test]
    fn test_entries_use_shader_names() {
        let names: Vec<&str> = sample().entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, Uniforms::NAMES.to_vec());
    }

    #[test]
    fn test_get_by_name() {
        let u = sample();
        assert_eq!(
            u.get("u_lightDirection"),
            Some(UniformValue::Vec3([1.0, 1.0, 1.0]))
        );
        assert_eq!(u.get("u_diffuse"), Some(UniformValue::Vec4([0.1, 0.2, 0.3, 1.0])));
        assert_eq!(u.get("u_color"), None);
    }

    #[test]
    fn test_matrix_is_column_major() {
        let Some(UniformValue::Mat4(m)) = sample().get("u_matrix") else {
            panic!("u_matrix missing");
        };
        assert_eq!(m[12], 1.0);
    }

    #[test]
    fn test_serializes_with_shader_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("u_lightDirection").is_some());
        assert_eq!(json["u_diffuse"].as_array().unwrap().len(), 4);
    }
}
