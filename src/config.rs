//! Resolved agent settings consumed by the snippet generator

use serde::Deserialize;

/// Resolved configuration snapshot injected by the host agent.
///
/// Loading and merging (config file, environment, collector response) belong
/// to the host agent; this crate only reads the resolved values. The scoped
/// "disable tracing" guards of the transaction lifecycle surface here as the
/// `trace_*` booleans rather than as mutable global state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// RUM master switch (`rum.enabled`).
    pub rum_enabled: bool,
    /// Whether the instrumentation layer auto-injects the snippets.
    pub auto_instrument: bool,
    /// Opts into JS error collection, selecting the full loader variant.
    pub js_errors_beta: bool,
    /// Account license key; source of the obfuscation key bytes.
    pub license_key: String,
    /// Collector-resolved beacon host.
    pub beacon: String,
    /// Collector-resolved error beacon host; may stay empty.
    pub error_beacon: String,
    /// RUM license key exposed to the page.
    pub browser_key: String,
    /// Collector-resolved application ids, in collector order.
    pub application_ids: Vec<String>,
    /// Raw loader script body inlined by the timing header.
    pub js_agent_loader: String,
    /// Analytics event collection enabled.
    pub analytics_events: bool,
    /// Transaction-level analytics enabled.
    pub analytics_transactions: bool,
    /// Attach custom attributes to page view events.
    pub capture_page_attributes: bool,
    /// Transaction tracer configuration flag; carried for the instrumentation
    /// layer, not consulted by RUM gating.
    pub transaction_tracer_enabled: bool,
    /// False while a disable-all-tracing guard is active.
    pub trace_execution: bool,
    /// False while a disable-transaction-tracing guard is active.
    pub trace_transactions: bool,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            rum_enabled: true,
            auto_instrument: true,
            js_errors_beta: false,
            license_key: String::new(),
            beacon: String::new(),
            error_beacon: String::new(),
            browser_key: String::new(),
            application_ids: Vec::new(),
            js_agent_loader: String::new(),
            analytics_events: true,
            analytics_transactions: true,
            capture_page_attributes: false,
            transaction_tracer_enabled: true,
            trace_execution: true,
            trace_transactions: true,
        }
    }
}

impl AgentSettings {
    /// Loader variant the host should fetch: `"full"` when the JS error beta
    /// is on, `"rum"` otherwise.
    pub fn loader(&self) -> &'static str {
        if self.js_errors_beta {
            "full"
        } else {
            "rum"
        }
    }

    /// Whether execution is currently traced at all. Either scoped disable
    /// guard suppresses snippet emission.
    pub fn execution_traced(&self) -> bool {
        self.trace_execution && self.trace_transactions
    }

    /// Whether custom attributes may ride on page view events. All three
    /// analytics flags must be on, or the extra-attribute channel degrades to
    /// empty.
    pub fn page_attributes_enabled(&self) -> bool {
        self.analytics_events && self.analytics_transactions && self.capture_page_attributes
    }
}
