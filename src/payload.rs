//! Structured RUM payload assembly

use serde::Serialize;

use crate::attributes::format_extra_data;
use crate::beacon::BeaconConfig;
use crate::errors::{Result, RumError};
use crate::obfuscate::obfuscate;
use crate::transaction::Transaction;

/// The data set inlined into the footer as `NREUM.info`.
///
/// Field order is the wire order; the browser agent tolerates reordering
/// but the emitted JSON keeps the historical layout for diffability.
#[derive(Debug, Clone, Serialize)]
pub struct RumPayload {
    pub beacon: String,
    #[serde(rename = "errorBeacon")]
    pub error_beacon: String,
    #[serde(rename = "licenseKey")]
    pub license_key: String,
    #[serde(rename = "applicationID")]
    pub application_id: String,
    #[serde(rename = "transactionName")]
    pub transaction_name: String,
    #[serde(rename = "queueTime")]
    pub queue_time: u64,
    #[serde(rename = "applicationTime")]
    pub application_time: u64,
    #[serde(rename = "ttGuid")]
    pub tt_guid: String,
    #[serde(rename = "agentToken")]
    pub agent_token: String,
    /// Loader file reference, filled in by the injecting layer. Always
    /// empty here.
    pub agent: String,
    pub extra: String,
}

impl RumPayload {
    /// Assemble the payload for one transaction.
    ///
    /// Timings are taken at the moment of assembly. The transaction must
    /// have been started; the renderer's gating guarantees that, and
    /// direct callers get an error instead of a zeroed timing.
    pub fn build(
        beacon: &BeaconConfig,
        txn: &Transaction,
        extra_enabled: bool,
    ) -> Result<Self> {
        let application_time = txn
            .elapsed_millis()
            .ok_or(RumError::TransactionNotStarted)?;
        let key = beacon.license_bytes();

        let extra_data = if extra_enabled {
            format_extra_data(&txn.custom_attributes)
        } else {
            String::new()
        };

        Ok(Self {
            beacon: beacon.beacon().to_string(),
            error_beacon: beacon.error_beacon().to_string(),
            license_key: beacon.browser_key().to_string(),
            application_id: beacon.application_ids().join(", "),
            transaction_name: obfuscate(key, txn.reported_name())?,
            queue_time: txn.queue_time.as_millis() as u64,
            application_time,
            tt_guid: txn.request_guid.clone().unwrap_or_default(),
            agent_token: txn.request_token.clone().unwrap_or_default(),
            agent: String::new(),
            extra: obfuscate(key, &extra_data)?,
        })
    }

    /// The inline-JSON form embedded in the footer script.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
