// src/capabilities/knn_classifier.rs
//
// k-nearest-neighbor classification over example tensors: brute-force cosine
// similarity against every stored example, plurality vote among the k nearest.
// Examples are flattened on entry; the first example fixes the expected
// flattened length.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::config::Settings;
use crate::core::tensor::Tensor;
use crate::engine::ops;

use super::{CapabilityError, CapabilityResult};

#[derive(Debug, Clone)]
pub struct KnnClassifierOptions {
    /// Neighbor count used when classify() is called without an explicit k.
    pub k: usize,
}

impl Default for KnnClassifierOptions {
    fn default() -> Self {
        Self { k: 3 }
    }
}

impl KnnClassifierOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            k: settings.defaults.k_neighbors,
        }
    }

    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

/// Outcome of a kNN classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnResult {
    /// Winning label (plurality among the k nearest; ties broken by total
    /// similarity).
    pub label: String,
    /// Per-label neighbor-count share of the k nearest, each in [0, 1].
    pub confidences: HashMap<String, f32>,
    /// The k nearest neighbors as (label, cosine similarity), best first.
    pub neighbors: Vec<(String, f32)>,
}

#[derive(Serialize, Deserialize)]
struct SavedExample {
    label: String,
    data: Vec<f32>,
}

#[derive(Serialize, Deserialize)]
struct SavedDataset {
    created_at: DateTime<Utc>,
    examples: Vec<SavedExample>,
}

#[derive(Debug, Default)]
pub struct KnnClassifier {
    // examples stored flattened, in insertion order
    examples: Vec<(String, Tensor)>,
    expected_len: Option<usize>,
    options: KnnClassifierOptions,
}

impl KnnClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: KnnClassifierOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Add a labeled example. Tensors of any rank are accepted and flattened;
    /// the first example fixes the expected flattened length.
    pub fn add_example(&mut self, tensor: &Tensor, label: &str) -> CapabilityResult<()> {
        let flat = ops::flatten(tensor)?;
        if flat.is_empty() {
            return Err(CapabilityError::InvalidInput(
                "cannot add an empty example".into(),
            ));
        }
        match self.expected_len {
            None => self.expected_len = Some(flat.len()),
            Some(expected) if expected != flat.len() => {
                return Err(CapabilityError::InvalidInput(format!(
                    "example has {} elements, classifier expects {}",
                    flat.len(),
                    expected
                )));
            }
            Some(_) => {}
        }
        self.examples.push((label.to_string(), flat));
        Ok(())
    }

    /// Classify a query tensor against the stored examples.
    ///
    /// Errors when no examples exist, when k is zero, when the query length
    /// does not match the examples, or when the query has zero norm.
    pub fn classify(&self, query: &Tensor, k: Option<usize>) -> CapabilityResult<KnnResult> {
        if self.examples.is_empty() {
            return Err(CapabilityError::NoExamples);
        }
        let k = k.unwrap_or(self.options.k);
        if k == 0 {
            return Err(CapabilityError::InvalidInput("k must be at least 1".into()));
        }

        let flat = ops::flatten(query)?;
        let expected = self.expected_len.unwrap_or(0);
        if flat.len() != expected {
            return Err(CapabilityError::InvalidInput(format!(
                "query has {} elements, classifier expects {}",
                flat.len(),
                expected
            )));
        }
        if ops::l2_norm(&flat)? == 0.0 {
            return Err(CapabilityError::InvalidInput(
                "query has zero norm, similarity is undefined".into(),
            ));
        }

        // Linear scan; stored zero-norm examples score 0.0 instead of failing
        // the whole query.
        let mut scored: Vec<(String, f32)> = Vec::with_capacity(self.examples.len());
        for (label, example) in &self.examples {
            let sim = if ops::l2_norm(example)? == 0.0 {
                0.0
            } else {
                ops::cosine_similarity(&flat, example)?
            };
            scored.push((label.clone(), sim));
        }
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let neighbors: Vec<(String, f32)> = scored.into_iter().take(k.min(self.examples.len())).collect();
        let votes = neighbors.len() as f32;

        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut sim_totals: HashMap<String, f32> = HashMap::new();
        for (label, sim) in &neighbors {
            *counts.entry(label.clone()).or_insert(0) += 1;
            *sim_totals.entry(label.clone()).or_insert(0.0) += sim;
        }

        let confidences: HashMap<String, f32> = counts
            .iter()
            .map(|(label, &n)| (label.clone(), n as f32 / votes))
            .collect();

        // plurality winner; ties go to the label with the larger similarity mass
        let label = counts
            .iter()
            .max_by(|(la, na), (lb, nb)| {
                na.cmp(nb).then_with(|| {
                    sim_totals[*la]
                        .partial_cmp(&sim_totals[*lb])
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
            })
            .map(|(label, _)| label.clone())
            .unwrap_or_default();

        Ok(KnnResult {
            label,
            confidences,
            neighbors,
        })
    }

    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    /// Distinct labels, in first-seen order.
    pub fn labels(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for (label, _) in &self.examples {
            if !seen.contains(label) {
                seen.push(label.clone());
            }
        }
        seen
    }

    pub fn label_count(&self) -> usize {
        self.labels().len()
    }

    /// Remove every example with the given label.
    pub fn clear_label(&mut self, label: &str) -> CapabilityResult<()> {
        let before = self.examples.len();
        self.examples.retain(|(l, _)| l != label);
        if self.examples.len() == before {
            return Err(CapabilityError::UnknownLabel(label.to_string()));
        }
        if self.examples.is_empty() {
            self.expected_len = None;
        }
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.examples.clear();
        self.expected_len = None;
    }

    /// Save the example set as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CapabilityResult<()> {
        let dataset = SavedDataset {
            created_at: Utc::now(),
            examples: self
                .examples
                .iter()
                .map(|(label, t)| SavedExample {
                    label: label.clone(),
                    data: t.data.clone(),
                })
                .collect(),
        };
        let text = serde_json::to_string_pretty(&dataset)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Load an example set saved with [`save`](KnnClassifier::save).
    pub fn load<P: AsRef<Path>>(path: P) -> CapabilityResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let dataset: SavedDataset = serde_json::from_str(&text)?;
        let mut clf = Self::new();
        for example in dataset.examples {
            let tensor = Tensor::vector(example.data);
            clf.add_example(&tensor, &example.label)?;
        }
        Ok(clf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained() -> KnnClassifier {
        let mut clf = KnnClassifier::new();
        clf.add_example(&Tensor::vector(vec![1.0, 0.0]), "x").unwrap();
        clf.add_example(&Tensor::vector(vec![0.9, 0.1]), "x").unwrap();
        clf.add_example(&Tensor::vector(vec![0.0, 1.0]), "y").unwrap();
        clf
    }

    #[test]
    fn classify_picks_nearest_label() {
        let clf = trained();
        let result = clf.classify(&Tensor::vector(vec![1.0, 0.05]), Some(3)).unwrap();
        assert_eq!(result.label, "x");
        assert!(result.confidences["x"] > result.confidences["y"]);
        assert_eq!(result.neighbors.len(), 3);
        assert_eq!(result.neighbors[0].0, "x");
    }

    #[test]
    fn classify_without_examples_is_error() {
        let clf = KnnClassifier::new();
        assert!(matches!(
            clf.classify(&Tensor::vector(vec![1.0]), None),
            Err(CapabilityError::NoExamples)
        ));
    }

    #[test]
    fn mismatched_lengths_are_errors() {
        let mut clf = trained();
        assert!(clf
            .add_example(&Tensor::vector(vec![1.0, 2.0, 3.0]), "z")
            .is_err());
        assert!(clf
            .classify(&Tensor::vector(vec![1.0, 2.0, 3.0]), None)
            .is_err());
    }

    #[test]
    fn zero_k_and_zero_norm_query_are_errors() {
        let clf = trained();
        assert!(clf.classify(&Tensor::vector(vec![1.0, 0.0]), Some(0)).is_err());
        assert!(clf.classify(&Tensor::vector(vec![0.0, 0.0]), None).is_err());
    }

    #[test]
    fn default_k_comes_from_settings() {
        let mut settings = Settings::default();
        settings.defaults.k_neighbors = 1;

        let mut clf = KnnClassifier::with_options(KnnClassifierOptions::from_settings(&settings));
        clf.add_example(&Tensor::vector(vec![1.0, 0.0]), "red").unwrap();
        clf.add_example(&Tensor::vector(vec![0.8, 0.6]), "green").unwrap();
        clf.add_example(&Tensor::vector(vec![0.6, 0.8]), "green").unwrap();

        // with k = 1 only the single nearest example votes; the default of 3
        // would give the two green examples the majority
        let query = Tensor::vector(vec![1.0, 0.3]);
        assert_eq!(clf.classify(&query, None).unwrap().label, "red");
        assert_eq!(clf.classify(&query, Some(3)).unwrap().label, "green");
    }

    #[test]
    fn clear_label_bookkeeping() {
        let mut clf = trained();
        clf.clear_label("x").unwrap();
        assert_eq!(clf.example_count(), 1);
        assert_eq!(clf.labels(), vec!["y".to_string()]);
        assert!(clf.clear_label("missing").is_err());
    }
}
