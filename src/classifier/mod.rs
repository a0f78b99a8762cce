mod builder;
mod classifier;
mod error;
mod preprocess;
mod ranking;

pub use builder::ClassifierBuilder;
pub use classifier::{Classifier, ClassifierInfo};
pub use error::ClassifierError;
pub use preprocess::Preprocessor;
pub use ranking::{top_labels, LabeledProbability, TOP_K};
