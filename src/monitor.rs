//! Browser timing snippet emission
//!
//! `BrowserMonitor` decides whether the current request gets RUM markup and
//! renders it. Every disabled or missing-input condition degrades to an
//! empty string; monitoring must never break the host page.

use tracing::{debug, error};

use crate::beacon::BeaconConfig;
use crate::config::AgentSettings;
use crate::metrics::Metrics;
use crate::payload::RumPayload;
use crate::transaction::Transaction;

const SCRIPT_OPEN: &str = "\n<script type=\"text/javascript\">";
const SCRIPT_CLOSE: &str = "</script>";
const NREUM_PRELUDE: &str = "window.NREUM||(NREUM={});NREUM.info=";

/// Capability for host string types that mark markup as pre-escaped for a
/// templating layer. `String` is the identity fallback.
pub trait Trustable {
    fn mark_safe(raw: String) -> Self;
}

impl Trustable for String {
    fn mark_safe(raw: String) -> Self {
        raw
    }
}

/// Gated renderer for the RUM header and footer snippets.
pub struct BrowserMonitor {
    settings: AgentSettings,
    beacon: Option<BeaconConfig>,
    metrics: Metrics,
}

impl BrowserMonitor {
    /// Monitor for a fully configured agent; the beacon configuration is
    /// snapshotted from the settings.
    pub fn new(settings: AgentSettings) -> Self {
        let beacon = BeaconConfig::from_settings(&settings);
        Self {
            settings,
            beacon: Some(beacon),
            metrics: Metrics::new(),
        }
    }

    /// Monitor for an agent still waiting on its remote configuration.
    /// Emission stays suppressed until a beacon configuration arrives.
    pub fn without_beacon(settings: AgentSettings) -> Self {
        Self {
            settings,
            beacon: None,
            metrics: Metrics::new(),
        }
    }

    /// Install the beacon configuration once the remote side provides it.
    pub fn set_beacon(&mut self, beacon: BeaconConfig) {
        self.beacon = Some(beacon);
    }

    pub fn beacon(&self) -> Option<&BeaconConfig> {
        self.beacon.as_ref()
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The `<script>` block carrying the JS agent loader, for the response
    /// `<head>`. Empty string when any gate suppresses emission.
    pub fn timing_header(&self) -> String {
        let beacon = match self.active_beacon() {
            Some(beacon) => beacon,
            None => return String::new(),
        };
        self.metrics.headers_emitted.inc();
        format!(
            "{}{}{}",
            SCRIPT_OPEN,
            beacon.js_agent_loader(),
            SCRIPT_CLOSE
        )
    }

    /// The `NREUM.info` `<script>` block for the end of the response body.
    ///
    /// Freezes the transaction name, exactly once, on every call that
    /// passes gating; the browser payload and the server-side report must
    /// agree on the name from that point on. Empty string when suppressed,
    /// in which case the transaction is left untouched.
    pub fn timing_footer(&self, txn: &mut Transaction) -> String {
        let beacon = match self.active_beacon() {
            Some(beacon) => beacon,
            None => return String::new(),
        };
        if beacon.browser_key().is_empty() {
            self.suppress("browser key not received");
            return String::new();
        }
        if !beacon.can_obfuscate() {
            self.suppress("license key too short to obfuscate");
            return String::new();
        }
        if txn.start_time.is_none() {
            self.suppress("transaction never started");
            return String::new();
        }

        txn.freeze_name();
        let extra_enabled = self.settings.page_attributes_enabled();
        let json = match RumPayload::build(beacon, txn, extra_enabled)
            .and_then(|payload| payload.to_json())
        {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to assemble browser timing footer: {}", e);
                return String::new();
            }
        };
        self.metrics.footers_emitted.inc();
        format!("{}{}{}{}", SCRIPT_OPEN, NREUM_PRELUDE, json, SCRIPT_CLOSE)
    }

    /// `timing_header` wrapped through the host's safe-markup type.
    pub fn timing_header_as<T: Trustable>(&self) -> T {
        T::mark_safe(self.timing_header())
    }

    /// `timing_footer` wrapped through the host's safe-markup type.
    pub fn timing_footer_as<T: Trustable>(&self, txn: &mut Transaction) -> T {
        T::mark_safe(self.timing_footer(txn))
    }

    /// Gates shared by header and footer. `None` means suppress.
    fn active_beacon(&self) -> Option<&BeaconConfig> {
        let beacon = match self.beacon.as_ref() {
            Some(beacon) => beacon,
            None => {
                self.suppress("beacon configuration not received");
                return None;
            }
        };
        if !beacon.rum_enabled() {
            self.suppress("rum disabled");
            return None;
        }
        if !self.settings.trace_execution {
            self.suppress("all tracing disabled");
            return None;
        }
        if !self.settings.trace_transactions {
            self.suppress("transaction tracing disabled");
            return None;
        }
        if beacon.js_agent_loader().is_empty() {
            self.suppress("no JS agent loader");
            return None;
        }
        Some(beacon)
    }

    fn suppress(&self, reason: &str) {
        debug!("Suppressing browser timing snippet: {}", reason);
        self.metrics.snippets_suppressed.inc();
    }
}
