use occipital::classifier::{ClassifierError, Preprocessor};
use occipital::{BuiltinModel, Classifier};
use std::fs;

#[test]
fn test_missing_graph_file() {
    let labels_path = "/tmp/occipital-it-labels.txt";
    fs::write(labels_path, "kit fox\nEnglish setter\n").unwrap();

    let result = Classifier::builder().with_files("/tmp/occipital-it-missing.onnx", labels_path);
    assert!(matches!(result, Err(ClassifierError::ModelLoadError(_))));

    fs::remove_file(labels_path).unwrap();
}

#[test]
fn test_missing_labels_file() {
    // The graph file only has to exist for the labels check to be reached;
    // it is not parsed before the labels load.
    let graph_path = "/tmp/occipital-it-placeholder.onnx";
    fs::write(graph_path, b"placeholder").unwrap();

    let result = Classifier::builder().with_files(graph_path, "/tmp/occipital-it-no-labels.txt");
    assert!(matches!(result, Err(ClassifierError::LabelLoadError(_))));

    fs::remove_file(graph_path).unwrap();
}

#[test]
fn test_malformed_graph_file() {
    let graph_path = "/tmp/occipital-it-garbage.onnx";
    let labels_path = "/tmp/occipital-it-garbage-labels.txt";
    fs::write(graph_path, b"this is not an onnx graph").unwrap();
    fs::write(labels_path, "a\nb\nc\n").unwrap();

    let result = Classifier::builder().with_files(graph_path, labels_path);
    assert!(matches!(result, Err(ClassifierError::ModelLoadError(_))));

    fs::remove_file(graph_path).unwrap();
    fs::remove_file(labels_path).unwrap();
}

#[test]
fn test_missing_model_in_directory() {
    let result = Classifier::builder().with_model_in(BuiltinModel::Inception, "/tmp/occipital-it-empty-dir");
    assert!(matches!(result, Err(ClassifierError::ModelLoadError(_))));
}

#[test]
fn test_html_error_page_fails_decoding() {
    // A server can answer a non-200 with an HTML body; the fetch step
    // passes it through and the decoder must reject it.
    let body = b"<html><head><title>404 Not Found</title></head></html>";

    let preprocessor = Preprocessor::new(&BuiltinModel::Inception.characteristics());
    let result = preprocessor.normalize(body);
    assert!(matches!(result, Err(ClassifierError::DecodeError(_))));
}
