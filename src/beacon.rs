//! Immutable beacon configuration

use crate::config::AgentSettings;
use crate::obfuscate::MIN_LICENSE_BYTES;

/// Agent-lifetime beacon configuration.
///
/// Built once from the resolved settings snapshot when the collector's
/// browser-monitoring values are known; read-only afterwards and shared
/// across all in-flight transactions without locking.
#[derive(Debug, Clone)]
pub struct BeaconConfig {
    beacon: String,
    error_beacon: String,
    browser_key: String,
    application_ids: Vec<String>,
    js_agent_loader: String,
    license_bytes: Vec<u8>,
    rum_enabled: bool,
}

impl BeaconConfig {
    /// Snapshot the browser-monitoring slice of the resolved settings.
    pub fn from_settings(settings: &AgentSettings) -> Self {
        Self {
            beacon: settings.beacon.clone(),
            error_beacon: settings.error_beacon.clone(),
            browser_key: settings.browser_key.clone(),
            application_ids: settings.application_ids.clone(),
            js_agent_loader: settings.js_agent_loader.clone(),
            license_bytes: settings.license_key.clone().into_bytes(),
            rum_enabled: settings.rum_enabled,
        }
    }

    /// Whether RUM is turned on and a browser key is present.
    pub fn enabled(&self) -> bool {
        self.rum_enabled && !self.browser_key.is_empty()
    }

    /// Whether the license key is long enough to key the obfuscation cipher.
    /// Short keys suppress footer emission rather than erroring.
    pub fn can_obfuscate(&self) -> bool {
        self.license_bytes.len() >= MIN_LICENSE_BYTES
    }

    pub fn rum_enabled(&self) -> bool {
        self.rum_enabled
    }

    pub fn beacon(&self) -> &str {
        &self.beacon
    }

    pub fn error_beacon(&self) -> &str {
        &self.error_beacon
    }

    pub fn browser_key(&self) -> &str {
        &self.browser_key
    }

    pub fn application_ids(&self) -> &[String] {
        &self.application_ids
    }

    pub fn js_agent_loader(&self) -> &str {
        &self.js_agent_loader
    }

    pub fn license_bytes(&self) -> &[u8] {
        &self.license_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AgentSettings {
        AgentSettings {
            beacon: "beacon".to_string(),
            error_beacon: "error-beacon".to_string(),
            browser_key: "browserKey".to_string(),
            application_ids: vec!["5".to_string(), "6".to_string()],
            js_agent_loader: "loader".to_string(),
            license_key: "a".repeat(13),
            ..AgentSettings::default()
        }
    }

    #[test]
    fn test_snapshot_from_settings() {
        let config = BeaconConfig::from_settings(&settings());
        assert_eq!("beacon", config.beacon());
        assert_eq!("error-beacon", config.error_beacon());
        assert_eq!("browserKey", config.browser_key());
        assert_eq!(&["5".to_string(), "6".to_string()], config.application_ids());
        assert_eq!("loader", config.js_agent_loader());
        assert_eq!(&[b'a'; 13], config.license_bytes());
    }

    #[test]
    fn test_enabled_requires_rum_and_browser_key() {
        assert!(BeaconConfig::from_settings(&settings()).enabled());

        let rum_off = AgentSettings {
            rum_enabled: false,
            ..settings()
        };
        assert!(!BeaconConfig::from_settings(&rum_off).enabled());

        let no_key = AgentSettings {
            browser_key: String::new(),
            ..settings()
        };
        assert!(!BeaconConfig::from_settings(&no_key).enabled());
    }

    #[test]
    fn test_can_obfuscate_needs_thirteen_license_bytes() {
        let short = AgentSettings {
            license_key: "a".repeat(12),
            ..settings()
        };
        assert!(!BeaconConfig::from_settings(&short).can_obfuscate());

        let exact = AgentSettings {
            license_key: "a".repeat(13),
            ..settings()
        };
        assert!(BeaconConfig::from_settings(&exact).can_obfuscate());
    }
}
