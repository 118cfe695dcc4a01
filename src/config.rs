//! Configuration for the service controller
//!
//! The service name and the property keys it maps to are named values
//! rather than literals buried in the control logic, so alternate
//! supervised services can be driven without touching the controller.

use serde::{Deserialize, Serialize};

/// Key prefix under which the supervisor publishes per-service status
pub const STATUS_KEY_PREFIX: &str = "init.svc.";

/// Control key the supervisor interprets as a start command
pub const CTL_START_KEY: &str = "ctl.start";

/// Control key the supervisor interprets as a stop command
pub const CTL_STOP_KEY: &str = "ctl.stop";

/// Supervisor-registered name of the access-point host daemon
pub const AP_SERVICE_NAME: &str = "hostapd";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name as registered with the init system
    pub service_name: String,

    /// Supervisor-maintained status key for this service
    pub status_key: String,

    /// Control key used to request a start
    pub start_key: String,

    /// Control key used to request a stop
    pub stop_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::for_service(AP_SERVICE_NAME)
    }
}

impl ServiceConfig {
    /// Build a configuration for an arbitrary supervised service
    ///
    /// The status key follows the supervisor's `init.svc.<name>` scheme;
    /// the control keys are shared across all services.
    pub fn for_service(name: &str) -> Self {
        Self {
            service_name: name.to_string(),
            status_key: format!("{}{}", STATUS_KEY_PREFIX, name),
            start_key: CTL_START_KEY.to_string(),
            stop_key: CTL_STOP_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_hostapd() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "hostapd");
        assert_eq!(config.status_key, "init.svc.hostapd");
        assert_eq!(config.start_key, "ctl.start");
        assert_eq!(config.stop_key, "ctl.stop");
    }

    #[test]
    fn test_for_service_derives_status_key() {
        let config = ServiceConfig::for_service("wpa_supplicant");
        assert_eq!(config.service_name, "wpa_supplicant");
        assert_eq!(config.status_key, "init.svc.wpa_supplicant");
        assert_eq!(config.start_key, "ctl.start");
        assert_eq!(config.stop_key, "ctl.stop");
    }

    #[test]
    fn test_config_serialization() {
        let config = ServiceConfig::default();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"service_name\":\"hostapd\""));
        assert!(json.contains("\"status_key\":\"init.svc.hostapd\""));
    }
}
