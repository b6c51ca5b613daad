//! `creditrisk-predictor` — the external classification capability.
//!
//! One narrow seam (`Predictor`), one production adapter for the managed
//! Vertex AI endpoint, and the interpretation of its raw output.

pub mod client;
pub mod error;
pub mod interpret;

pub use client::{Predictor, VertexConfig, VertexPredictor};
pub use error::PredictError;
