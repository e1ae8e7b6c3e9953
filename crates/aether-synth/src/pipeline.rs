//! Pipeline synthesis

use aether_core::{Agent, Sink};
use indexmap::IndexMap;

use crate::document::{Value, map};
use crate::exporter::{self, DEFAULT_PROMETHEUS_PORT};
use crate::signal::Signal;

/// Synthesize the collector configuration document for one agent
///
/// Pure function over snapshots: the same agent, sink list, signal set,
/// and port override always produce the same document, byte for byte
/// once rendered.
pub fn synthesize(agent: &Agent, sinks: &[Sink], signals: &[Signal], prom_port_override: Option<u16>) -> Value {
    let mut receivers = IndexMap::new();
    receivers.insert("otlp".to_owned(), otlp_receiver());

    let has_scrape_receiver = !agent.scrape_targets.is_empty();
    if has_scrape_receiver {
        receivers.insert("prometheus".to_owned(), prometheus_receiver(&agent.scrape_targets));
    }

    let processors = map([
        (
            "memory_limiter",
            map([
                ("check_interval", "5s".into()),
                ("limit_mib", 256.into()),
                ("spike_limit_mib", 64.into()),
            ]),
        ),
        (
            "batch",
            map([
                ("timeout", "1s".into()),
                ("send_batch_size", 512.into()),
                ("send_batch_max_size", 1024.into()),
            ]),
        ),
    ]);

    // Collapsing map keyed by exporter type: a later sink of the same type
    // replaces the earlier fragment at its original position.
    let mut exporters: IndexMap<String, Value> = IndexMap::new();
    let mut enabled: Vec<&'static str> = Vec::new();
    for sink in sinks {
        let (key, fragment) = exporter::exporter_entry(&sink.kind, prom_port_override);
        exporters.insert(key.to_owned(), fragment);
        if !enabled.contains(&key) {
            enabled.push(key);
        }
    }
    if exporters.is_empty() {
        // Keeps the exporters block non-empty even when no pipeline will
        // reference the entry.
        let port = prom_port_override.unwrap_or(DEFAULT_PROMETHEUS_PORT);
        exporters.insert("prometheus".to_owned(), exporter::prometheus_fragment(port));
    }

    let mut pipelines = IndexMap::new();
    for signal in signals {
        pipelines.insert(signal.to_string(), pipeline_entry(*signal, has_scrape_receiver, &enabled));
    }

    let mut document = IndexMap::new();
    document.insert("receivers".to_owned(), Value::Map(receivers));
    document.insert("processors".to_owned(), processors);
    document.insert("exporters".to_owned(), Value::Map(exporters));
    document.insert(
        "service".to_owned(),
        map([("pipelines", Value::Map(pipelines))]),
    );
    Value::Map(document)
}

/// Fixed OTLP receiver: gRPC on 4317, HTTP on 4318
fn otlp_receiver() -> Value {
    map([(
        "protocols",
        map([
            ("grpc", map([("endpoint", "0.0.0.0:4317".into())])),
            ("http", map([("endpoint", "0.0.0.0:4318".into())])),
        ]),
    )])
}

/// Prometheus receiver with a single scrape job over the agent's targets
fn prometheus_receiver(targets: &[String]) -> Value {
    let targets = Value::Seq(targets.iter().map(|target| Value::from(target.as_str())).collect());
    map([(
        "config",
        map([(
            "scrape_configs",
            Value::Seq(vec![map([
                ("job_name", "aether-scrape".into()),
                ("metrics_path", "/metrics".into()),
                ("static_configs", Value::Seq(vec![map([("targets", targets)])])),
            ])]),
        )]),
    )])
}

fn pipeline_entry(signal: Signal, has_scrape_receiver: bool, enabled: &[&'static str]) -> Value {
    let mut receivers = vec![Value::from("otlp")];
    if signal == Signal::Metrics && has_scrape_receiver {
        receivers.push("prometheus".into());
    }

    let exporters: Vec<Value> = if enabled.is_empty() {
        let fallback = if signal == Signal::Metrics { "prometheus" } else { "otlp" };
        vec![fallback.into()]
    } else {
        enabled.iter().copied().map(Value::from).collect()
    };

    map([
        ("receivers", Value::Seq(receivers)),
        ("processors", Value::Seq(vec!["memory_limiter".into(), "batch".into()])),
        ("exporters", Value::Seq(exporters)),
    ])
}
