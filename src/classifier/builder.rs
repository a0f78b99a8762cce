use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info};
use ort::session::Session;

use super::classifier::Classifier;
use super::error::ClassifierError;
use super::preprocess::Preprocessor;
use crate::config::ClassifierConfig;
use crate::models::{BuiltinModel, ModelCharacteristics};
use crate::runtime::{load_graph, RuntimeConfig};

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    graph_path: Option<PathBuf>,
    labels_path: Option<PathBuf>,
    session: Option<Session>,
    labels: Option<Vec<String>>,
    model_characteristics: Option<ModelCharacteristics>,
    runtime_config: RuntimeConfig,
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime configuration for ONNX model execution
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Loads a builtin model from the default model directory (see
    /// `ClassifierConfig::default_model_dir`).
    ///
    /// # Errors
    /// - `BuildError` if a graph was already loaded into this builder
    /// - `ModelLoadError` if the graph file is missing or malformed
    /// - `LabelLoadError` if the labels file is unreadable
    pub fn with_model(self, model: BuiltinModel) -> Result<Self, ClassifierError> {
        self.load(ClassifierConfig::for_model(model), model.characteristics())
    }

    /// Loads a builtin model from an explicit directory.
    pub fn with_model_in<P: AsRef<Path>>(
        self,
        model: BuiltinModel,
        dir: P,
    ) -> Result<Self, ClassifierError> {
        self.load(
            ClassifierConfig::for_model_in(model, dir),
            model.characteristics(),
        )
    }

    /// Loads a graph and labels file from arbitrary paths, assuming the
    /// Inception input geometry (224x224 RGB, mean 117).
    pub fn with_files<P: AsRef<Path>, Q: AsRef<Path>>(
        self,
        graph_path: P,
        labels_path: Q,
    ) -> Result<Self, ClassifierError> {
        self.load(
            ClassifierConfig::new(graph_path, labels_path),
            ModelCharacteristics::default(),
        )
    }

    /// Loads a graph and labels file from arbitrary paths with explicit
    /// input geometry.
    pub fn with_files_and_characteristics<P: AsRef<Path>, Q: AsRef<Path>>(
        self,
        graph_path: P,
        labels_path: Q,
        characteristics: ModelCharacteristics,
    ) -> Result<Self, ClassifierError> {
        self.load(ClassifierConfig::new(graph_path, labels_path), characteristics)
    }

    fn load(
        mut self,
        config: ClassifierConfig,
        characteristics: ModelCharacteristics,
    ) -> Result<Self, ClassifierError> {
        if self.graph_path.is_some() || self.labels_path.is_some() {
            return Err(ClassifierError::BuildError(
                "Graph and label paths already set".to_string(),
            ));
        }

        if !config.graph_path.exists() {
            return Err(ClassifierError::ModelLoadError(format!(
                "Graph file not found: {}",
                config.graph_path.display()
            )));
        }

        let labels = load_labels(&config.labels_path)?;
        info!(
            "Loaded {} labels from {}",
            labels.len(),
            config.labels_path.display()
        );

        let session = load_graph(&config.graph_path, &self.runtime_config).map_err(|e| {
            error!("Failed to load graph: {}", e);
            ClassifierError::ModelLoadError(format!(
                "Failed to load graph {}: {}",
                config.graph_path.display(),
                e
            ))
        })?;

        Self::validate_session(&session)?;
        info!("Graph structure validated successfully");

        self.graph_path = Some(config.graph_path);
        self.labels_path = Some(config.labels_path);
        self.session = Some(session);
        self.labels = Some(labels);
        self.model_characteristics = Some(characteristics);
        Ok(self)
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Errors
    /// - `BuildError` if no graph and labels were loaded
    pub fn build(mut self) -> Result<Classifier, ClassifierError> {
        let session = self
            .session
            .take()
            .ok_or_else(|| ClassifierError::BuildError("No graph loaded".to_string()))?;
        let labels = self
            .labels
            .take()
            .ok_or_else(|| ClassifierError::BuildError("No labels loaded".to_string()))?;
        let model_characteristics = self
            .model_characteristics
            .take()
            .ok_or_else(|| ClassifierError::BuildError("Model characteristics not set".to_string()))?;

        let preprocessor = Preprocessor::new(&model_characteristics);

        Ok(Classifier {
            graph_path: self.graph_path.take().unwrap(),
            labels_path: self.labels_path.take().unwrap(),
            session: Arc::new(session),
            labels: Arc::new(labels),
            preprocessor,
            model_characteristics,
        })
    }

    /// Validates that the graph declares the input/output nodes the
    /// executor binds at run time.
    fn validate_session(session: &Session) -> Result<(), ClassifierError> {
        if session.inputs.is_empty() {
            return Err(ClassifierError::ModelLoadError(
                "Graph declares no input nodes".to_string(),
            ));
        }
        if session.outputs.is_empty() {
            return Err(ClassifierError::ModelLoadError(
                "Graph declares no output nodes".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reads a labels file: UTF-8 text, one label per line, order-significant.
fn load_labels(path: &Path) -> Result<Vec<String>, ClassifierError> {
    let file = File::open(path).map_err(|e| {
        ClassifierError::LabelLoadError(format!("Failed to open {}: {}", path.display(), e))
    })?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .map_err(|e| {
            ClassifierError::LabelLoadError(format!("Failed to read {}: {}", path.display(), e))
        })
}
