use prometheus::{IntCounter, Registry};

/// Supportability counters for snippet emission.
pub struct Metrics {
    pub headers_emitted: IntCounter,
    pub footers_emitted: IntCounter,
    pub snippets_suppressed: IntCounter,
    registry: Registry,
}

impl Metrics {
    pub fn new() -> Self {
        let headers_emitted =
            IntCounter::new("rum_headers_emitted", "Number of timing headers emitted").unwrap();
        let footers_emitted =
            IntCounter::new("rum_footers_emitted", "Number of timing footers emitted").unwrap();
        let snippets_suppressed = IntCounter::new(
            "rum_snippets_suppressed",
            "Number of header or footer requests suppressed by gating",
        )
        .unwrap();
        let registry = Registry::new();
        registry
            .register(Box::new(headers_emitted.clone()))
            .unwrap();
        registry
            .register(Box::new(footers_emitted.clone()))
            .unwrap();
        registry
            .register(Box::new(snippets_suppressed.clone()))
            .unwrap();
        Self {
            headers_emitted,
            footers_emitted,
            snippets_suppressed,
            registry,
        }
    }

    /// Registry for the host agent's exporter.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_registered_and_incrementable() {
        let metrics = Metrics::new();
        metrics.headers_emitted.inc();
        metrics.snippets_suppressed.inc();
        metrics.snippets_suppressed.inc();
        assert_eq!(1, metrics.headers_emitted.get());
        assert_eq!(0, metrics.footers_emitted.get());
        assert_eq!(2, metrics.snippets_suppressed.get());
        assert_eq!(3, metrics.registry().gather().len());
    }
}
