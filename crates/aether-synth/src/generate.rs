//! Config generation entry point

use aether_core::{Agent, Sink};

use crate::error::GenerateError;
use crate::pipeline;
use crate::signal::Signal;

/// Resource lookups the generator needs from the control plane
///
/// Implemented by the resource store. `find_sinks` returns only sinks
/// that still exist, in the order their ids were given; missing ids are
/// silently omitted so synthesis never fails on referential drift.
pub trait ConfigStore {
    /// Look up an agent snapshot by id
    fn find_agent(&self, id: &str) -> Option<Agent>;

    /// Resolve sink ids to snapshots, dropping ids that no longer exist
    fn find_sinks(&self, ids: &[String]) -> Vec<Sink>;
}

/// Generate the rendered collector configuration for an agent
///
/// Takes a point-in-time snapshot of the agent and its sinks, filters the
/// requested signal names (unknown ones dropped, empty set defaulting to
/// metrics), synthesizes the document, and renders it. Performs no
/// mutation of stored state.
///
/// # Errors
///
/// Returns [`GenerateError::AgentNotFound`] if the agent id does not
/// resolve. Missing sink ids and unknown signal names are recovered
/// locally, never errored.
pub fn generate_config<S: AsRef<str>>(
    store: &dyn ConfigStore,
    agent_id: &str,
    requested_signals: &[S],
    prom_port_override: Option<u16>,
) -> Result<String, GenerateError> {
    let agent = store.find_agent(agent_id).ok_or_else(|| GenerateError::AgentNotFound {
        agent: agent_id.to_owned(),
    })?;

    let sinks = store.find_sinks(&agent.sink_ids);
    let signals = Signal::filter_requested(requested_signals);

    tracing::debug!(
        agent = %agent.id,
        sinks = sinks.len(),
        signals = signals.len(),
        "synthesizing collector config"
    );

    let document = pipeline::synthesize(&agent, &sinks, &signals, prom_port_override);
    Ok(document.render())
}
