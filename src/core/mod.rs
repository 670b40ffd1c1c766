// src/core/mod.rs

pub mod config;
pub mod tensor;

pub use config::Settings;
pub use tensor::{Shape, Tensor, TensorError};
