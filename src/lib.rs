//! Browser RUM snippet generation core for APM agents

pub mod attributes;
pub mod beacon;
pub mod config;
pub mod errors;
pub mod logger;
pub mod metrics;
pub mod monitor;
pub mod obfuscate;
pub mod payload;
pub mod transaction;

// Re-exports
pub use attributes::format_extra_data;
pub use beacon::BeaconConfig;
pub use config::AgentSettings;
pub use errors::{Result, RumError};
pub use metrics::Metrics;
pub use monitor::{BrowserMonitor, Trustable};
pub use obfuscate::{deobfuscate, obfuscate, MIN_LICENSE_BYTES};
pub use payload::RumPayload;
pub use transaction::{Transaction, FALLBACK_TRANSACTION_NAME};
