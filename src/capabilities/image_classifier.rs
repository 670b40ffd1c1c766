// src/capabilities/image_classifier.rs
//
// Task-specific wrapper over the engine: a linear classifier (one weight row
// and bias per label) applied to a flattened input tensor, with softmax
// confidences. Models are small JSON documents loaded from a filesystem path
// or an http(s) URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::config::{ModelSettings, Settings};
use crate::core::tensor::{Shape, Tensor};
use crate::engine::ops;

use super::{CapabilityError, CapabilityResult, Classification};

#[derive(Debug, Clone)]
pub struct ImageClassifierOptions {
    /// Number of ranked labels returned when classify() is called without an
    /// explicit top_k.
    pub top_k: usize,
    /// Directory where URL-fetched model documents are cached.
    pub cache_dir: PathBuf,
}

impl Default for ImageClassifierOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            cache_dir: ModelSettings::default().cache_dir,
        }
    }
}

impl ImageClassifierOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            top_k: settings.defaults.top_k,
            cache_dir: settings.model.cache_dir.clone(),
        }
    }

    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    pub fn cache_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.cache_dir = dir.into();
        self
    }
}

/// Filesystem-safe cache file name for a model URL.
fn cache_key(url: &str) -> String {
    url.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Serialized model document. `weights` holds one row per label, each row as
/// long as the flattened input; `biases` holds one value per label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub labels: Vec<String>,
    pub input_shape: Vec<usize>,
    pub weights: Vec<Vec<f32>>,
    pub biases: Vec<f32>,
}

#[derive(Debug)]
pub struct ImageClassifier {
    name: String,
    labels: Vec<String>,
    input_shape: Shape,
    weights: Tensor,
    biases: Tensor,
    options: ImageClassifierOptions,
    loaded_at: DateTime<Utc>,
}

impl ImageClassifier {
    /// Load a model from a filesystem path or an http(s) URL.
    ///
    /// URL-fetched documents are cached in `options.cache_dir` and served
    /// from there on later loads. Fetching is synchronous (reqwest blocking);
    /// call it from a plain thread, not inside an async runtime.
    pub fn load(source: &str, options: ImageClassifierOptions) -> CapabilityResult<Self> {
        let text = if source.starts_with("http://") || source.starts_with("https://") {
            let cached = options.cache_dir.join(cache_key(source));
            if cached.is_file() {
                std::fs::read_to_string(&cached)?
            } else {
                let timeout = Settings::load().model.request_timeout_secs;
                let client = reqwest::blocking::Client::builder()
                    .timeout(Duration::from_secs(timeout))
                    .build()?;
                let text = client.get(source).send()?.error_for_status()?.text()?;
                // a failed cache write never fails the load
                if std::fs::create_dir_all(&options.cache_dir).is_ok() {
                    let _ = std::fs::write(&cached, &text);
                }
                text
            }
        } else {
            std::fs::read_to_string(source)?
        };

        let spec: ModelSpec = serde_json::from_str(&text)?;
        Self::from_spec(spec, options)
    }

    /// Build a classifier from an already-parsed model document.
    pub fn from_spec(spec: ModelSpec, options: ImageClassifierOptions) -> CapabilityResult<Self> {
        if spec.labels.is_empty() {
            return Err(CapabilityError::InvalidModel(
                "model declares no labels".into(),
            ));
        }

        let input_shape = Shape::new(spec.input_shape.clone());
        let features = input_shape.num_elements();
        if features == 0 {
            return Err(CapabilityError::InvalidModel(
                "model input shape has zero elements".into(),
            ));
        }

        if spec.weights.len() != spec.labels.len() {
            return Err(CapabilityError::InvalidModel(format!(
                "{} weight rows for {} labels",
                spec.weights.len(),
                spec.labels.len()
            )));
        }
        if spec.biases.len() != spec.labels.len() {
            return Err(CapabilityError::InvalidModel(format!(
                "{} biases for {} labels",
                spec.biases.len(),
                spec.labels.len()
            )));
        }
        for (i, row) in spec.weights.iter().enumerate() {
            if row.len() != features {
                return Err(CapabilityError::InvalidModel(format!(
                    "weight row {} has {} values, input shape {:?} needs {}",
                    i,
                    row.len(),
                    input_shape.dims,
                    features
                )));
            }
        }

        let flat: Vec<f32> = spec.weights.iter().flatten().copied().collect();
        let weights = Tensor::matrix(spec.labels.len(), features, flat)?;
        let biases = Tensor::vector(spec.biases.clone());

        Ok(Self {
            name: spec.name,
            labels: spec.labels,
            input_shape,
            weights,
            biases,
            options,
            loaded_at: Utc::now(),
        })
    }

    /// Classify an input tensor, returning ranked label/confidence pairs.
    ///
    /// The input shape must match the model's declared input shape exactly; a
    /// mismatch is an error, never a silently defaulted result. Engine errors
    /// from the inference pipeline propagate unchanged.
    pub fn classify(
        &self,
        input: &Tensor,
        top_k: Option<usize>,
    ) -> CapabilityResult<Vec<Classification>> {
        if input.shape != self.input_shape {
            return Err(CapabilityError::InvalidInput(format!(
                "input shape {:?} does not match model input shape {:?}",
                input.shape.dims, self.input_shape.dims
            )));
        }

        let k = top_k.unwrap_or(self.options.top_k);
        if k == 0 {
            return Err(CapabilityError::InvalidInput(
                "top_k must be at least 1".into(),
            ));
        }

        let flat = ops::flatten(input)?;
        let scores = ops::dot(&self.weights, &flat)?;
        let scores = ops::add(&scores, &self.biases)?;
        let confidences = ops::softmax(&scores)?;

        let mut ranked: Vec<Classification> = self
            .labels
            .iter()
            .zip(confidences.data.iter())
            .map(|(label, &confidence)| Classification {
                label: label.clone(),
                confidence,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(k.min(self.labels.len()));
        Ok(ranked)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn input_shape(&self) -> &Shape {
        &self.input_shape
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
