//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with system settings.
//! NO HTTP - direct function calls for performance.

use super::{
    error::SettingsError,
    model::{K8sClusterSetting, SubscribeCallback},
};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// System settings API for inter-module communication
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Get a setting, falling back to its default (or an empty string)
    async fn get(&self, name: &str) -> Result<String, SettingsError>;

    /// Snapshot of every known setting, defaults included
    async fn get_all(&self) -> Result<BTreeMap<String, String>, SettingsError>;

    /// Write a setting only if it has never been written
    async fn create(&self, name: &str, value: &str) -> Result<(), SettingsError>;

    /// Create or overwrite a setting
    async fn set(&self, name: &str, value: &str) -> Result<(), SettingsError>;

    /// Register a change callback, optionally delivering the current value first
    async fn subscribe(&self, name: &str, callback: SubscribeCallback, deliver_current: bool);

    /// Decode the Kubernetes cluster setting
    async fn k8s_cluster_setting(&self) -> Result<K8sClusterSetting, SettingsError>;
}
