use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use super::error::ClassifierError;

/// Number of labels reported per classified image.
pub const TOP_K: usize = 5;

/// One label paired with the model's confidence for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledProbability {
    pub label: String,
    pub probability: f32,
}

impl fmt::Display for LabeledProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Label: {}, probability: {:.2}%",
            self.label,
            self.probability * 100.0
        )
    }
}

/// Pairs probabilities with labels by index and returns the `k` most
/// probable entries, sorted descending.
///
/// Pairing truncates to `min(labels.len(), probabilities.len())`; excess
/// entries on either side are ignored. Entries with equal probability keep
/// no guaranteed relative order.
///
/// # Errors
/// - `TooFewResults` if fewer than `k` pairs exist after truncation
pub fn top_labels(
    labels: &[String],
    probabilities: &[f32],
    k: usize,
) -> Result<Vec<LabeledProbability>, ClassifierError> {
    let mut ranked: Vec<LabeledProbability> = labels
        .iter()
        .zip(probabilities.iter())
        .map(|(label, &probability)| LabeledProbability {
            label: label.clone(),
            probability,
        })
        .collect();

    if ranked.len() < k {
        return Err(ClassifierError::TooFewResults {
            available: ranked.len(),
            required: k,
        });
    }

    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(k);

    Ok(ranked)
}
