//! In-memory resource store for the control plane
//!
//! Holds Projects, Sinks, and Agents in insertion-ordered maps behind a
//! read-write lock. Writes validate referential integrity (sink ids on
//! agents); reads are tolerant of drift, per the synthesis contract:
//! a sink that disappears after an agent referenced it is silently
//! dropped from lookups rather than surfaced as an error.

mod error;

use std::sync::{PoisonError, RwLock};

use aether_core::{Agent, AgentCreate, Project, ProjectCreate, Sink, SinkCreate};
use aether_synth::ConfigStore;
use indexmap::IndexMap;
use jiff::Timestamp;
use rand::Rng as _;
use rand::distr::Alphanumeric;

pub use error::StoreError;

/// Insertion-ordered, lock-guarded store of control-plane resources
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    projects: IndexMap<String, Project>,
    sinks: IndexMap<String, Sink>,
    agents: IndexMap<String, Agent>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a project
    pub fn create_project(&self, create: ProjectCreate) -> Project {
        let project = Project {
            id: new_id(),
            name: create.name,
            created_at: Timestamp::now(),
        };
        self.write().projects.insert(project.id.clone(), project.clone());
        project
    }

    /// All projects, in creation order
    pub fn list_projects(&self) -> Vec<Project> {
        self.read().projects.values().cloned().collect()
    }

    /// Look up a project by id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id does not resolve
    pub fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        self.read().projects.get(id).cloned().ok_or_else(|| not_found("project", id))
    }

    /// Create a sink
    ///
    /// The sink type was already validated by deserialization into
    /// [`aether_core::SinkKind`]; nothing else is checked at this boundary.
    pub fn create_sink(&self, create: SinkCreate) -> Sink {
        let sink = Sink {
            id: new_id(),
            name: create.name,
            kind: create.kind,
            project_id: create.project_id,
            created_at: Timestamp::now(),
        };
        self.write().sinks.insert(sink.id.clone(), sink.clone());
        sink
    }

    /// All sinks, in creation order
    pub fn list_sinks(&self) -> Vec<Sink> {
        self.read().sinks.values().cloned().collect()
    }

    /// Look up a sink by id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id does not resolve
    pub fn get_sink(&self, id: &str) -> Result<Sink, StoreError> {
        self.read().sinks.get(id).cloned().ok_or_else(|| not_found("sink", id))
    }

    /// Create an agent, issuing its token
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownSinkIds`] if any referenced sink does
    /// not exist at creation time. There is no cascading protection the
    /// other way: deleting sinks later leaves dangling ids that reads
    /// tolerate.
    pub fn create_agent(&self, create: AgentCreate) -> Result<Agent, StoreError> {
        let mut inner = self.write();

        let unknown: Vec<String> = create
            .sink_ids
            .iter()
            .filter(|id| !inner.sinks.contains_key(id.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(StoreError::UnknownSinkIds { ids: unknown });
        }

        let agent = Agent {
            id: new_id(),
            name: create.name,
            mode: create.mode,
            project_id: create.project_id,
            sink_ids: create.sink_ids,
            scrape_targets: create.scrape_targets,
            labels: create.labels,
            token: issue_token(),
            created_at: Timestamp::now(),
        };
        inner.agents.insert(agent.id.clone(), agent.clone());
        Ok(agent)
    }

    /// All agents, in creation order
    pub fn list_agents(&self) -> Vec<Agent> {
        self.read().agents.values().cloned().collect()
    }

    /// Look up an agent by id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id does not resolve
    pub fn get_agent(&self, id: &str) -> Result<Agent, StoreError> {
        self.read().agents.get(id).cloned().ok_or_else(|| not_found("agent", id))
    }

    /// Replace an agent's token with a freshly issued one
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id does not resolve
    pub fn rotate_token(&self, id: &str) -> Result<Agent, StoreError> {
        let mut inner = self.write();
        let agent = inner.agents.get_mut(id).ok_or_else(|| not_found("agent", id))?;
        agent.token = issue_token();
        tracing::info!(agent = %agent.id, "agent token rotated");
        Ok(agent.clone())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigStore for MemoryStore {
    fn find_agent(&self, id: &str) -> Option<Agent> {
        self.read().agents.get(id).cloned()
    }

    fn find_sinks(&self, ids: &[String]) -> Vec<Sink> {
        let inner = self.read();
        ids.iter().filter_map(|id| inner.sinks.get(id).cloned()).collect()
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Issue a fresh opaque agent credential
fn issue_token() -> String {
    let suffix: String = rand::rng().sample_iter(Alphanumeric).take(32).map(char::from).collect();
    format!("aet_{suffix}")
}

fn not_found(kind: &'static str, id: &str) -> StoreError {
    StoreError::NotFound { kind, id: id.to_owned() }
}

#[cfg(test)]
mod tests {
    use aether_core::{AgentMode, KafkaSink, OtlpSink, SinkKind};

    use super::*;

    fn sink_create(kind: SinkKind) -> SinkCreate {
        SinkCreate {
            name: None,
            kind,
            project_id: None,
        }
    }

    fn agent_create(sink_ids: Vec<String>) -> AgentCreate {
        AgentCreate {
            name: "edge".to_owned(),
            mode: AgentMode::Agent,
            project_id: None,
            sink_ids,
            scrape_targets: Vec::new(),
            labels: std::collections::HashMap::new(),
        }
    }

    #[test]
    fn projects_list_in_creation_order() {
        let store = MemoryStore::new();
        let first = store.create_project(ProjectCreate { name: "alpha".to_owned() });
        let second = store.create_project(ProjectCreate { name: "beta".to_owned() });

        let names: Vec<String> = store.list_projects().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn get_unknown_project_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_project("nope"),
            Err(StoreError::NotFound { kind: "project", .. })
        ));
    }

    #[test]
    fn agent_with_unknown_sink_ids_is_rejected() {
        let store = MemoryStore::new();
        let sink = store.create_sink(sink_create(SinkKind::Kafka(KafkaSink::default())));

        let result = store.create_agent(agent_create(vec![sink.id, "ghost".to_owned()]));
        match result {
            Err(StoreError::UnknownSinkIds { ids }) => assert_eq!(ids, vec!["ghost"]),
            other => panic!("expected UnknownSinkIds, got {other:?}"),
        }
    }

    #[test]
    fn agent_token_has_prefix_and_rotates() {
        let store = MemoryStore::new();
        let agent = store.create_agent(agent_create(Vec::new())).unwrap();
        assert!(agent.token.starts_with("aet_"));

        let rotated = store.rotate_token(&agent.id).unwrap();
        assert_eq!(rotated.id, agent.id);
        assert_ne!(rotated.token, agent.token);

        // Rotation must not touch anything but the token
        assert_eq!(rotated.name, agent.name);
        assert_eq!(rotated.created_at, agent.created_at);
    }

    #[test]
    fn find_sinks_drops_missing_ids_and_keeps_order() {
        let store = MemoryStore::new();
        let kafka = store.create_sink(sink_create(SinkKind::Kafka(KafkaSink::default())));
        let otlp = store.create_sink(sink_create(SinkKind::Otlp(OtlpSink::default())));

        let resolved = store.find_sinks(&[
            otlp.id.clone(),
            "ghost".to_owned(),
            kafka.id.clone(),
        ]);
        let ids: Vec<String> = resolved.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![otlp.id, kafka.id]);
    }

    #[test]
    fn find_agent_returns_snapshot() {
        let store = MemoryStore::new();
        let agent = store.create_agent(agent_create(Vec::new())).unwrap();

        let snapshot = store.find_agent(&agent.id).unwrap();
        assert_eq!(snapshot.id, agent.id);
        assert!(store.find_agent("missing").is_none());
    }
}
