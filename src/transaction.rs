//! Per-request transaction state

use std::time::{Duration, Instant};

use serde_json::{Map, Value};
use tracing::debug;

/// Name reported when a transaction was never named before its freeze point.
pub const FALLBACK_TRANSACTION_NAME: &str = "(unknown)";

/// Mutable state for one monitored request.
///
/// Instrumentation renames the transaction as routing decisions happen, so
/// the name stays writable until the response body is produced. Footer
/// generation freezes it at that point; whatever name the browser payload
/// carries must match what the rest of the agent reports for the request.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    /// When the request started being serviced. `None` until the
    /// instrumentation marks the start; the footer requires it.
    pub start_time: Option<Instant>,
    /// Time spent queued ahead of the application, per the front-end
    /// request headers.
    pub queue_time: Duration,
    /// Per-request token handed to the browser agent.
    pub request_token: Option<String>,
    /// Cross-process trace guid for this request.
    pub request_guid: Option<String>,
    /// User-supplied page attributes, scalars only at format time.
    pub custom_attributes: Map<String, Value>,
    name: Option<String>,
    name_frozen: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transaction whose service clock started at `start_time`.
    pub fn started_at(start_time: Instant) -> Self {
        Self {
            start_time: Some(start_time),
            ..Self::default()
        }
    }

    /// Rename the transaction. Silently ignored once the name is frozen.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.name_frozen {
            debug!("Ignoring rename of a frozen transaction");
            return;
        }
        self.name = Some(name.into());
    }

    /// The current name, if one was ever assigned. An assigned empty
    /// string is a real name, distinct from never-named.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Latch the name against further renames. Idempotent.
    pub fn freeze_name(&mut self) {
        self.name_frozen = true;
    }

    pub fn name_frozen(&self) -> bool {
        self.name_frozen
    }

    /// The name the browser payload reports: the assigned name, or the
    /// fallback when the transaction was never named.
    pub fn reported_name(&self) -> &str {
        self.name.as_deref().unwrap_or(FALLBACK_TRANSACTION_NAME)
    }

    pub fn add_custom_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.custom_attributes.insert(key.into(), value);
    }

    /// Wall-clock milliseconds since the transaction started, clamped at
    /// zero. `None` when the start was never marked.
    pub fn elapsed_millis(&self) -> Option<u64> {
        self.start_time.map(|start| {
            Instant::now().saturating_duration_since(start).as_millis() as u64
        })
    }
}
