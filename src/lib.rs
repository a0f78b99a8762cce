//! An image classifier library using pretrained ONNX graphs, plus the small
//! CLI that labels an image fetched from a URL.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use occipital::{fetch_image, BuiltinModel, Classifier};
//!
//! let image = fetch_image("https://example.com/cat.jpg")?;
//!
//! let classifier = Classifier::builder()
//!     .with_model(BuiltinModel::Inception)?
//!     .build()?;
//!
//! for entry in classifier.classify(&image)? {
//!     println!("{}", entry);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Custom model files
//!
//! The default graph and label locations come from `ClassifierConfig`
//! (`/model`, overridable via the `OCCIPITAL_MODEL_DIR` environment
//! variable). Arbitrary paths work too:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use occipital::Classifier;
//!
//! let classifier = Classifier::builder()
//!     .with_files("path/to/graph.onnx", "path/to/labels.txt")?
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod fetch;
pub mod models;
mod runtime;

pub use classifier::{
    Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, LabeledProbability, TOP_K,
};
pub use config::ClassifierConfig;
pub use fetch::{fetch_image, FetchError};
pub use models::{BuiltinModel, ModelCharacteristics, ModelInfo};
pub use runtime::{create_session_builder, RuntimeConfig};

pub fn init_logger() {
    env_logger::init();
}
