// src/engine/mod.rs

pub mod chained;
pub mod error;
pub mod ops;

pub use chained::ChainedOps;
pub use error::{EngineError, EngineResult};
