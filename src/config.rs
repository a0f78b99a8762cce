use std::env;
use std::path::{Path, PathBuf};

use crate::models::BuiltinModel;

/// Locations of the model files read at startup.
///
/// Passed explicitly to the builder so the loader stays testable with
/// arbitrary paths; there is no module-level mutable state.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub graph_path: PathBuf,
    pub labels_path: PathBuf,
}

impl ClassifierConfig {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(graph_path: P, labels_path: Q) -> Self {
        Self {
            graph_path: graph_path.as_ref().to_path_buf(),
            labels_path: labels_path.as_ref().to_path_buf(),
        }
    }

    /// Resolves the file paths for a builtin model inside the default
    /// model directory.
    pub fn for_model(model: BuiltinModel) -> Self {
        Self::for_model_in(model, Self::default_model_dir())
    }

    /// Resolves the file paths for a builtin model inside an explicit
    /// directory.
    pub fn for_model_in<P: AsRef<Path>>(model: BuiltinModel, dir: P) -> Self {
        let info = model.get_model_info();
        let dir = dir.as_ref();
        Self {
            graph_path: dir.join(info.graph_file),
            labels_path: dir.join(info.labels_file),
        }
    }

    /// Returns the default model directory path
    pub fn default_model_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("OCCIPITAL_MODEL_DIR") {
            return PathBuf::from(path);
        }

        // 2. The conventional mount point for bundled model files
        PathBuf::from("/model")
    }
}
