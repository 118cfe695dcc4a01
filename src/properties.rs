//! Property store access for status reads and control writes
//!
//! The platform property store brokers status signaling and service
//! control between processes. The controller only needs a read and a
//! write, so the store sits behind a trait and tests substitute an
//! in-memory implementation.

use anyhow::{anyhow, Context, Result};
use log::debug;
use std::collections::HashMap;
use std::process::Command;
use std::sync::Mutex;

/// Key-value capability backing the service controller
pub trait PropertyStore {
    /// Read the current value for a key, empty if unset or unreadable
    fn get(&self, key: &str) -> String;

    /// Write a value; writes to control keys are interpreted by the
    /// supervisor as commands and can be rejected
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Production store backed by the platform property tools
pub struct SystemPropertyStore;

impl SystemPropertyStore {
    pub fn new() -> Self {
        SystemPropertyStore
    }
}

impl PropertyStore for SystemPropertyStore {
    fn get(&self, key: &str) -> String {
        // An unreadable property is indistinguishable from an unset one
        match Command::new("getprop").arg(key).output() {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).trim_end().to_string()
            }
            Ok(output) => {
                debug!("getprop {} exited with {}", key, output.status);
                String::new()
            }
            Err(e) => {
                debug!("Failed to execute getprop: {}", e);
                String::new()
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let output = Command::new("setprop")
            .args([key, value])
            .output()
            .context("Failed to execute setprop")?;

        if output.status.success() {
            Ok(())
        } else {
            Err(anyhow!(
                "Property write rejected for {}: {}",
                key,
                String::from_utf8_lossy(&output.stderr).trim()
            ))
        }
    }
}

/// In-memory store for tests and host-side simulation
///
/// Records every attempted write in order, including rejected ones, so
/// callers can assert on exactly which control commands were issued.
#[derive(Default)]
pub struct MemoryPropertyStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
    reject_writes: bool,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a property value without recording a write
    pub fn seed(&self, key: &str, value: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.values.insert(key.to_string(), value.to_string());
    }

    /// Reject all subsequent writes
    pub fn reject_writes(&self) {
        self.inner.lock().unwrap().reject_writes = true;
    }

    /// Writes attempted so far, in order
    pub fn writes(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().writes.clone()
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get(&self, key: &str) -> String {
        let inner = self.inner.lock().unwrap();
        inner.values.get(key).cloned().unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.writes.push((key.to_string(), value.to_string()));

        if inner.reject_writes {
            return Err(anyhow!("Property write rejected for {}", key));
        }

        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
