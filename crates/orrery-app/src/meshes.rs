//! Mesh loading for the configured bodies.

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use orrery_config::Config;
use orrery_obj::{VertexAttributes, load_obj};
use tracing::{debug, warn};

use crate::error::AppError;

/// Parsed meshes keyed by the mesh name bodies refer to.
///
/// Bodies naming the same file share one parsed copy.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    by_name: HashMap<String, Rc<VertexAttributes>>,
    by_path: HashMap<PathBuf, Rc<VertexAttributes>>,
}

impl MeshRegistry {
    /// Load the mesh of every configured body.
    pub fn load(config: &Config) -> Result<Self, AppError> {
        let mut registry = Self::default();
        for body in &config.scene.bodies {
            if registry.by_name.contains_key(&body.mesh) {
                continue;
            }
            let path = config.mesh_path(body);
            let mesh = match registry.by_path.get(&path) {
                Some(mesh) => {
                    debug!(body = %body.name, path = %path.display(), "reusing loaded mesh");
                    Rc::clone(mesh)
                }
                None => {
                    let mesh = Rc::new(load_obj(&path)?);
                    if !mesh.is_consistent() {
                        warn!(
                            path = %path.display(),
                            "mesh attribute streams disagree on vertex count"
                        );
                    }
                    registry.by_path.insert(path, Rc::clone(&mesh));
                    mesh
                }
            };
            registry.by_name.insert(body.mesh.clone(), mesh);
        }
        Ok(registry)
    }

    /// Mesh registered under `name`.
    pub fn get(&self, name: &str) -> Option<&VertexAttributes> {
        self.by_name.get(name).map(Rc::as_ref)
    }

    /// Number of distinct files loaded.
    pub fn file_count(&self) -> usize {
        self.by_path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_config::BodyConfig;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\n";

    fn config_with(dir: &std::path::Path, meshes: &[&str]) -> Config {
        let mut config = Config::default();
        config.scene.asset_dir = dir.to_path_buf();
        config.scene.bodies = meshes
            .iter()
            .enumerate()
            .map(|(i, mesh)| BodyConfig {
                name: format!("body{i}"),
                mesh: mesh.to_string(),
                ..BodyConfig::default()
            })
            .collect();
        config
    }

    #[test]
    fn test_shared_mesh_loaded_once() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tri.obj"), TRIANGLE).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/other.obj"), TRIANGLE).unwrap();

        let config = config_with(
            dir.path(),
            &["tri.obj", "tri.obj", "./tri.obj", "sub/other.obj"],
        );
        let registry = MeshRegistry::load(&config).unwrap();
        assert_eq!(registry.get("tri.obj").unwrap().vertex_count(), 3);
        assert!(registry.get("sub/other.obj").is_some());
        assert!(registry.get("missing.obj").is_none());
        assert_eq!(registry.file_count(), 2);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(dir.path(), &["nope.obj"]);
        let err = MeshRegistry::load(&config).unwrap_err();
        assert!(matches!(err, AppError::Mesh(_)));
    }
}
