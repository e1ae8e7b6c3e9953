use strum::IntoEnumIterator;

/// Telemetry data kinds a pipeline can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Signal {
    Metrics,
    Logs,
    Traces,
}

impl Signal {
    /// Filter requested signal names down to the supported set
    ///
    /// Unknown names are dropped, never errored. The result is in
    /// canonical order (metrics, logs, traces) regardless of request
    /// order, with duplicates collapsed. An empty result defaults to
    /// metrics so a pipeline always exists.
    pub fn filter_requested<S: AsRef<str>>(requested: &[S]) -> Vec<Self> {
        let parsed: Vec<Self> = requested.iter().filter_map(|name| name.as_ref().parse().ok()).collect();

        let ordered: Vec<Self> = Self::iter().filter(|signal| parsed.contains(signal)).collect();
        if ordered.is_empty() { vec![Self::Metrics] } else { ordered }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_dropped() {
        assert_eq!(Signal::filter_requested(&["metrics", "bogus"]), vec![Signal::Metrics]);
    }

    #[test]
    fn all_unknown_defaults_to_metrics() {
        assert_eq!(Signal::filter_requested(&["bogus"]), vec![Signal::Metrics]);
        assert_eq!(Signal::filter_requested::<&str>(&[]), vec![Signal::Metrics]);
    }

    #[test]
    fn canonical_order_regardless_of_request_order() {
        assert_eq!(
            Signal::filter_requested(&["traces", "metrics", "logs"]),
            vec![Signal::Metrics, Signal::Logs, Signal::Traces]
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(Signal::filter_requested(&["logs", "logs"]), vec![Signal::Logs]);
    }
}
