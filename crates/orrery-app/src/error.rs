use std::path::PathBuf;

use orrery_config::ConfigError;
use orrery_input::InputScriptError;
use orrery_obj::ObjError;

/// Errors that stop a driver run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mesh(#[from] ObjError),

    #[error(transparent)]
    Script(#[from] InputScriptError),

    #[error("body {body} refers to mesh {mesh} which was never loaded")]
    MissingMesh { body: String, mesh: String },

    #[error("failed to open output {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write draw record: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to encode draw record: {0}")]
    Encode(#[from] serde_json::Error),
}
