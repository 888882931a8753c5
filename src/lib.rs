//! Deterministic tokenizer/embedding heatmap demo.
//!
//! A single linear pipeline: text -> tokens -> vocabulary ids -> simulated
//! embedding matrix -> colored terminal grid. Every run is a pure function
//! of the input text; no state survives between runs.

pub mod embedder;
pub mod heatmap;
pub mod pipeline;
pub mod text_input;
pub mod tokenizer;
pub mod vocab;

pub use heatmap::HeatmapRenderer;
pub use pipeline::{run_pipeline, PipelineRun};
