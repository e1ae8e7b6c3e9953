//! Sink-to-exporter mapping

use aether_core::SinkKind;
use indexmap::IndexMap;

use crate::document::{Value, map};

/// Exposition port used when neither an override nor a sink port is given
pub(crate) const DEFAULT_PROMETHEUS_PORT: u16 = 8889;

/// Map a sink to its exporter key and configuration fragment
///
/// Deterministic per-type rules: missing settings fall back to fixed
/// defaults. For prometheus sinks, `prom_port_override` wins over the
/// sink's own port.
pub(crate) fn exporter_entry(kind: &SinkKind, prom_port_override: Option<u16>) -> (&'static str, Value) {
    match kind {
        SinkKind::Prometheus(prom) => {
            let port = prom_port_override.or(prom.port).unwrap_or(DEFAULT_PROMETHEUS_PORT);
            ("prometheus", prometheus_fragment(port))
        }
        SinkKind::Otlp(otlp) => {
            let endpoint = otlp.endpoint.clone().unwrap_or_else(|| "localhost:4317".to_owned());
            let mut fragment = IndexMap::new();
            fragment.insert("endpoint".to_owned(), endpoint.into());
            if otlp.insecure.unwrap_or(true) {
                fragment.insert("tls".to_owned(), map([("insecure", true.into())]));
            }
            ("otlp", Value::Map(fragment))
        }
        SinkKind::Kafka(kafka) => {
            let brokers = kafka.brokers.clone().unwrap_or_else(|| vec!["localhost:9092".to_owned()]);
            let topic = kafka.topic.clone().unwrap_or_else(|| "otlp_data".to_owned());
            (
                "kafka",
                map([
                    ("brokers", Value::Seq(brokers.into_iter().map(Value::from).collect())),
                    ("topic", topic.into()),
                ]),
            )
        }
        SinkKind::SplunkHec(splunk) => {
            let token = splunk.token.clone().unwrap_or_else(|| "CHANGE_ME".to_owned());
            let endpoint = splunk
                .endpoint
                .clone()
                .unwrap_or_else(|| "https://splunk:8088/services/collector".to_owned());
            (
                "splunk_hec",
                map([
                    ("token", token.into()),
                    ("endpoint", endpoint.into()),
                    ("insecure_skip_verify", true.into()),
                ]),
            )
        }
        SinkKind::Elasticsearch(es) => {
            let endpoints = es
                .endpoints
                .clone()
                .unwrap_or_else(|| vec!["http://elasticsearch:9200".to_owned()]);
            let index = es.index.clone().unwrap_or_else(|| "app-logs-%{+yyyy.MM.dd}".to_owned());
            (
                "elasticsearch",
                map([
                    ("endpoints", Value::Seq(endpoints.into_iter().map(Value::from).collect())),
                    ("index", index.into()),
                ]),
            )
        }
    }
}

/// Prometheus exporter fragment bound to the given exposition port
///
/// Also used as the fallback exporter when an agent has no usable sinks.
pub(crate) fn prometheus_fragment(port: u16) -> Value {
    map([
        ("endpoint", format!("0.0.0.0:{port}").into()),
        ("namespace", "aether".into()),
    ])
}
