//! Reference input generator and benchmark utilities for OCR references.
//!
//! This crate provides deterministic generation of realistic invoice-like
//! inputs for benchmarking and correctness sweeps of `ocrref-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_inputs};
