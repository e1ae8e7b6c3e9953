use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A grouping label for sinks and agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Creation time
    pub created_at: Timestamp,
}

/// Payload for creating a project
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectCreate {
    pub name: String,
}
