use ort::Error as OrtError;
use std::fmt;

/// Represents the different types of errors that can occur while
/// classifying an image.
#[derive(Debug)]
pub enum ClassifierError {
    /// Error occurred while reading or deserializing the graph file
    ModelLoadError(String),
    /// Error occurred while reading the labels file
    LabelLoadError(String),
    /// Error occurred while decoding the image bytes
    DecodeError(String),
    /// Error occurred while executing the graph
    InferenceError(String),
    /// The graph output did not have the expected rank or element type
    ShapeError(String),
    /// Fewer labeled probabilities were available than requested
    TooFewResults { available: usize, required: usize },
    /// Error occurred during the build phase
    BuildError(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoadError(msg) => write!(f, "Model load error: {}", msg),
            Self::LabelLoadError(msg) => write!(f, "Label load error: {}", msg),
            Self::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            Self::InferenceError(msg) => write!(f, "Inference error: {}", msg),
            Self::ShapeError(msg) => write!(f, "Shape error: {}", msg),
            Self::TooFewResults { available, required } => write!(
                f,
                "Too few results: {} labeled probabilities available, {} required",
                available, required
            ),
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<OrtError> for ClassifierError {
    fn from(err: OrtError) -> Self {
        ClassifierError::InferenceError(err.to_string())
    }
}
