//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, implemented by the [extraction::Extraction] pipeline.
pub mod extraction;
pub mod pipeline;

pub use extraction::{Extracted, Extraction, RunSummary};
pub use pipeline::Pipeline;
