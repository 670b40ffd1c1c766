// src/utils/mod.rs

pub mod community;
pub mod environment;
pub mod testing;

pub use community::community_statement;
pub use environment::{detect, Environment};
