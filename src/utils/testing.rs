// src/utils/testing.rs
//
// Shared helpers for unit and integration tests. Exported publicly so the
// tests/ directory (and downstream users writing their own tests) can reuse
// them.

use std::path::PathBuf;

use crate::capabilities::image_classifier::ModelSpec;
use crate::core::tensor::Tensor;

pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Deep comparison of two tensors within a tolerance.
pub fn tensors_close(a: &Tensor, b: &Tensor, tol: f32) -> bool {
    a.shape == b.shape
        && a.data
            .iter()
            .zip(b.data.iter())
            .all(|(x, y)| approx_eq(*x, *y, tol))
}

/// Unique temp path for a test artifact. Not created, caller writes it.
pub fn temp_path(name: &str) -> PathBuf {
    let unique = format!("mlbox-test-{}-{}", std::process::id(), name);
    std::env::temp_dir().join(unique)
}

/// Two-label linear model over 2x2 inputs: "cat" fires on the top-left
/// element, "dog" on the bottom-right.
pub fn tiny_model_spec() -> ModelSpec {
    ModelSpec {
        name: "tiny".into(),
        labels: vec!["cat".into(), "dog".into()],
        input_shape: vec![2, 2],
        weights: vec![vec![1.0, 0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0, 1.0]],
        biases: vec![0.0, 0.0],
    }
}

/// Write the tiny model as JSON and return its path.
pub fn write_tiny_model(name: &str) -> std::io::Result<PathBuf> {
    let path = temp_path(name);
    let text = serde_json::to_string(&tiny_model_spec()).expect("spec serializes");
    std::fs::write(&path, text)?;
    Ok(path)
}
