use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A logical collector instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Deployment mode
    pub mode: AgentMode,
    /// Owning project, if any
    #[serde(default)]
    pub project_id: Option<String>,
    /// Referenced sinks, in priority order
    #[serde(default)]
    pub sink_ids: Vec<String>,
    /// `host:port` targets to scrape; presence enables the prometheus receiver
    #[serde(default)]
    pub scrape_targets: Vec<String>,
    /// Free-form labels, not consumed by synthesis
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Opaque credential issued at creation, replaced on rotation
    pub token: String,
    /// Creation time
    pub created_at: Timestamp,
}

/// Collector deployment modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentMode {
    /// A collector process deployed next to the workload
    Agent,
    /// Collection without a dedicated collector process
    Agentless,
}

/// Payload for creating an agent
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentCreate {
    pub name: String,
    pub mode: AgentMode,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub sink_ids: Vec<String>,
    #[serde(default)]
    pub scrape_targets: Vec<String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}
