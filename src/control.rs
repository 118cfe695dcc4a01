//! Service lifecycle control through supervisor property writes
//!
//! Start and stop are idempotent against the observed status and issue
//! at most one control write per call. A successful write only requests
//! the transition; the supervisor converges asynchronously and
//! confirmation is left to the caller.

use crate::config::ServiceConfig;
use crate::properties::{PropertyStore, SystemPropertyStore};
use log::{debug, error};
use serde::{Deserialize, Serialize};

const STATUS_RUNNING: &str = "running";
const STATUS_STOPPED: &str = "stopped";

/// Lifecycle state observed from a single status read
///
/// The supervisor only guarantees the terminal values; anything else is
/// a transition in progress and is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    Running,
    Stopped,
    /// Status key unset; never started or already torn down
    Unset,
    /// Transitioning or unrecognized status value
    Other(String),
}

impl ServiceState {
    fn from_status(status: &str) -> Self {
        match status {
            STATUS_RUNNING => ServiceState::Running,
            STATUS_STOPPED => ServiceState::Stopped,
            "" => ServiceState::Unset,
            other => ServiceState::Other(other.to_string()),
        }
    }
}

/// Controller issuing start/stop requests for a supervised service
pub struct ServiceController<S: PropertyStore = SystemPropertyStore> {
    config: ServiceConfig,
    store: S,
}

impl ServiceController<SystemPropertyStore> {
    /// Create a controller over the platform property store
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, SystemPropertyStore::new())
    }
}

impl<S: PropertyStore> ServiceController<S> {
    /// Create a controller over an injected property store
    pub fn with_store(config: ServiceConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Request a service start unless the service is already running
    ///
    /// Returns false only when the control write is rejected. The read
    /// and the write are not atomic; overlapping callers may both issue
    /// the command, which the supervisor treats as a no-op.
    pub fn start(&self) -> bool {
        let status = self.store.get(&self.config.status_key);
        if status == STATUS_RUNNING {
            debug!(
                "{} already running, skipping start",
                self.config.service_name
            );
            return true;
        }

        if let Err(e) = self
            .store
            .set(&self.config.start_key, &self.config.service_name)
        {
            error!("Failed to start {}: {}", self.config.service_name, e);
            return false;
        }

        debug!("{} start requested", self.config.service_name);
        true
    }

    /// Request a service stop unless the service is already stopped or
    /// was never started
    ///
    /// Returns false only when the control write is rejected.
    pub fn stop(&self) -> bool {
        debug!("Stopping {}...", self.config.service_name);

        let status = self.store.get(&self.config.status_key);
        if status.is_empty() || status == STATUS_STOPPED {
            debug!(
                "{} already stopped, skipping stop",
                self.config.service_name
            );
            return true;
        }

        if let Err(e) = self
            .store
            .set(&self.config.stop_key, &self.config.service_name)
        {
            error!("Failed to stop {}: {}", self.config.service_name, e);
            return false;
        }

        debug!("{} stop requested", self.config.service_name);
        true
    }

    /// Observe the current lifecycle state with a single status read
    pub fn state(&self) -> ServiceState {
        ServiceState::from_status(&self.store.get(&self.config.status_key))
    }

    /// Whether the supervisor currently reports the service as running
    pub fn is_running(&self) -> bool {
        self.state() == ServiceState::Running
    }
}
