//! Domain model for the Aether control plane
//!
//! Projects group resources, Sinks describe export destinations, and Agents
//! describe collector instances. These types are shared by the store, the
//! synthesis engine, and the HTTP layer.

pub mod agent;
mod error;
pub mod project;
pub mod sink;

pub use agent::{Agent, AgentCreate, AgentMode};
pub use error::HttpError;
pub use project::{Project, ProjectCreate};
pub use sink::{
    ElasticsearchSink, KafkaSink, OtlpSink, PrometheusSink, Sink, SinkCreate, SinkKind, SplunkHecSink,
};
