//! Configuration synthesis engine
//!
//! Given an agent and its resolved sinks, deterministically builds a
//! collector configuration document (receivers, processors, exporters,
//! per-signal pipelines) and renders it as indented text.

pub mod document;
mod error;
mod exporter;
mod generate;
mod pipeline;
mod signal;

pub use document::Value;
pub use error::GenerateError;
pub use generate::{ConfigStore, generate_config};
pub use pipeline::synthesize;
pub use signal::Signal;
