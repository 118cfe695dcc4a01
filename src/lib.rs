//! apcontrol - Lifecycle control for supervised system services
//!
//! Issues idempotent start/stop requests for the access-point host
//! daemon through the platform property store, which brokers control
//! commands to the init system.

pub mod config;
pub mod control;
pub mod properties;

pub use config::ServiceConfig;
pub use control::{ServiceController, ServiceState};
pub use properties::{MemoryPropertyStore, PropertyStore, SystemPropertyStore};
