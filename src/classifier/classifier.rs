use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use ndarray::{s, Array4};
use ort::session::Session;
use ort::value::Tensor;
use serde::Serialize;

use super::error::ClassifierError;
use super::preprocess::Preprocessor;
use super::ranking::{top_labels, LabeledProbability, TOP_K};
use crate::models::ModelCharacteristics;

/// An image classifier backed by a pretrained ONNX graph.
///
/// Holds the committed session, the index-aligned label list, and the
/// normalization pipeline. The classifier is `Send + Sync`: the session
/// and labels are behind `Arc` and never mutated after build.
#[derive(Debug)]
pub struct Classifier {
    pub(crate) graph_path: PathBuf,
    pub(crate) labels_path: PathBuf,
    pub(crate) session: Arc<Session>,
    pub(crate) labels: Arc<Vec<String>>,
    pub(crate) preprocessor: Preprocessor,
    pub(crate) model_characteristics: ModelCharacteristics,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

/// A snapshot of the classifier's configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierInfo {
    pub graph_path: PathBuf,
    pub labels_path: PathBuf,
    pub num_labels: usize,
    pub input_size: u32,
}

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> ClassifierInfo {
        ClassifierInfo {
            graph_path: self.graph_path.clone(),
            labels_path: self.labels_path.clone(),
            num_labels: self.labels.len(),
            input_size: self.model_characteristics.input_size,
        }
    }

    /// Classifies one JPEG image and returns the five most probable
    /// labels, sorted descending by probability.
    ///
    /// # Arguments
    /// * `image_bytes` - Raw JPEG bytes, e.g. as returned by `fetch_image`
    ///
    /// # Errors
    /// - `DecodeError` if the bytes are not a decodable JPEG
    /// - `InferenceError` if the graph cannot be executed
    /// - `ShapeError` if the graph output is not a rank-2 f32 tensor
    /// - `TooFewResults` if fewer than five labeled pairs are available
    pub fn classify(&self, image_bytes: &[u8]) -> Result<Vec<LabeledProbability>, ClassifierError> {
        let batch = self.preprocessor.normalize(image_bytes)?;
        let probabilities = self.run_graph(batch)?;
        top_labels(&self.labels, &probabilities, TOP_K)
    }

    /// Runs the classification graph on a normalized batch and returns the
    /// probability vector for the single image in it.
    ///
    /// The tensor is bound to the graph's declared input node and the
    /// first declared output node is fetched; node names are resolved from
    /// the session, never hardcoded.
    fn run_graph(&self, batch: Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let input_name = self
            .session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| {
                ClassifierError::InferenceError("Graph declares no input nodes".to_string())
            })?;

        let batch_dyn = batch.into_dyn();
        let batch_view = batch_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            input_name.as_str(),
            Tensor::from_array(&batch_view).map_err(|e| {
                ClassifierError::InferenceError(format!("Failed to create input tensor: {}", e))
            })?,
        );

        let outputs = self.session.run(input_tensors).map_err(|e| {
            ClassifierError::InferenceError(format!("Failed to run graph: {}", e))
        })?;

        let output = outputs[0].try_extract_tensor::<f32>().map_err(|e| {
            ClassifierError::ShapeError(format!("Output is not an f32 tensor: {}", e))
        })?;

        // Checked conversion: the value must be a [batch, classes] matrix.
        if output.ndim() != 2 {
            return Err(ClassifierError::ShapeError(format!(
                "Expected a rank-2 [batch, classes] output, got rank {}",
                output.ndim()
            )));
        }

        Ok(output.slice(s![0, ..]).iter().copied().collect())
    }
}
