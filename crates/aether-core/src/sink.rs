use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A configured external destination for telemetry data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sink {
    /// Unique identifier
    pub id: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Destination type and its settings
    #[serde(flatten)]
    pub kind: SinkKind,
    /// Owning project, if any
    #[serde(default)]
    pub project_id: Option<String>,
    /// Creation time
    pub created_at: Timestamp,
}

/// Destination types and their type-specific settings
///
/// This is the closed set of supported sink types; an unknown `type` tag
/// fails deserialization at the creation boundary. Every setting is
/// optional; synthesis substitutes per-type defaults for missing values.
#[derive(Debug, Clone, Serialize, Deserialize, strum::Display)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SinkKind {
    /// Prometheus exposition endpoint
    Prometheus(PrometheusSink),
    /// OTLP gRPC destination
    Otlp(OtlpSink),
    /// Kafka topic
    Kafka(KafkaSink),
    /// Splunk HTTP Event Collector
    SplunkHec(SplunkHecSink),
    /// Elasticsearch index
    Elasticsearch(ElasticsearchSink),
}

/// Settings for a Prometheus exposition sink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrometheusSink {
    /// Port the exposition endpoint binds to
    #[serde(default)]
    pub port: Option<u16>,
}

/// Settings for an OTLP sink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtlpSink {
    /// Destination address as `host:port`
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Plaintext transport; treated as true when unset
    #[serde(default)]
    pub insecure: Option<bool>,
}

/// Settings for a Kafka sink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KafkaSink {
    /// Broker addresses
    #[serde(default)]
    pub brokers: Option<Vec<String>>,
    /// Destination topic
    #[serde(default)]
    pub topic: Option<String>,
}

/// Settings for a Splunk HEC sink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplunkHecSink {
    /// HEC token
    #[serde(default)]
    pub token: Option<String>,
    /// Collector endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Settings for an Elasticsearch sink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElasticsearchSink {
    /// Cluster node URLs
    #[serde(default)]
    pub endpoints: Option<Vec<String>>,
    /// Target index pattern
    #[serde(default)]
    pub index: Option<String>,
}

/// Payload for creating a sink
#[derive(Debug, Deserialize)]
pub struct SinkCreate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: SinkKind,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_deserializes() {
        let create: SinkCreate = serde_json::from_str(
            r#"{"name": "events", "type": "kafka", "config": {"brokers": ["k1:9092"], "topic": "t"}}"#,
        )
        .unwrap();
        match create.kind {
            SinkKind::Kafka(kafka) => {
                assert_eq!(kafka.brokers.as_deref(), Some(&["k1:9092".to_owned()][..]));
                assert_eq!(kafka.topic.as_deref(), Some("t"));
            }
            other => panic!("expected kafka, got {other}"),
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result = serde_json::from_str::<SinkCreate>(r#"{"type": "statsd", "config": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_config_defaults_all_settings() {
        let create: SinkCreate = serde_json::from_str(r#"{"type": "otlp", "config": {}}"#).unwrap();
        match create.kind {
            SinkKind::Otlp(otlp) => {
                assert!(otlp.endpoint.is_none());
                assert!(otlp.insecure.is_none());
            }
            other => panic!("expected otlp, got {other}"),
        }
    }

    #[test]
    fn kind_display_matches_wire_tag() {
        let kind = SinkKind::SplunkHec(SplunkHecSink::default());
        assert_eq!(kind.to_string(), "splunk_hec");
    }
}
