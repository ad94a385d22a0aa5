//! Inference-service implementations of the TextGenerator trait.
//!
//! Enable with the `ollama` feature.

pub mod ollama;

pub use ollama::OllamaGenerator;
