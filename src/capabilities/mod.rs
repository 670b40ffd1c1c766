// src/capabilities/mod.rs

pub mod image_classifier;
pub mod knn_classifier;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::tensor::TensorError;
use crate::engine::EngineError;

pub use image_classifier::{ImageClassifier, ImageClassifierOptions, ModelSpec};
pub use knn_classifier::{KnnClassifier, KnnClassifierOptions, KnnResult};

/// One ranked prediction: a label and its confidence in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Engine errors pass through unchanged; capabilities never hide them.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Tensor error: {0}")]
    Tensor(#[from] TensorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model fetch error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Classifier has no examples")]
    NoExamples,

    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    /// The deferred factory was dropped before producing a result.
    #[error("Deferred call was cancelled before completion")]
    Cancelled,
}

pub type CapabilityResult<T> = Result<T, CapabilityError>;
